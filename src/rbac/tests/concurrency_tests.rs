//! Concurrent access tests for permit/deny roles

use cretoai_rbac::{LayerPermission, Permission, PermitDenyRole, RestPermission, StdPermission};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

const WRITERS: usize = 8;
const PER_WRITER: usize = 250;

#[test]
fn test_concurrent_assign_no_lost_updates() {
    let role = Arc::new(PermitDenyRole::new("shared"));

    let handles: Vec<_> = (0..WRITERS)
        .map(|w| {
            let role = Arc::clone(&role);
            thread::spawn(move || {
                for i in 0..PER_WRITER {
                    let id = format!("writer-{}:perm-{}", w, i);
                    role.assign(LayerPermission::new(id).into_ref()).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(role.permissions().len(), WRITERS * PER_WRITER);
}

#[test]
fn test_concurrent_assign_revoke_permit() {
    let role = PermitDenyRole::new("shared");

    // Stable grants that readers must always see
    role.assign(RestPermission::new("GET", "/stable/*").into_ref()).unwrap();

    let reader_hits = AtomicUsize::new(0);

    thread::scope(|s| {
        for w in 0..WRITERS {
            let role = &role;
            s.spawn(move || {
                for i in 0..PER_WRITER {
                    let p = StdPermission::new(format!("w{}-{}", w, i));
                    role.assign(p.clone().into_ref()).unwrap();
                    // Revoke every odd permission after assigning it
                    if i % 2 == 1 {
                        role.revoke(&p).unwrap();
                    }
                }
            });
        }

        for _ in 0..4 {
            let role = &role;
            let reader_hits = &reader_hits;
            s.spawn(move || {
                for i in 0..PER_WRITER {
                    let q = RestPermission::new("get", format!("/stable/{}", i));
                    if role.permit(&q) {
                        reader_hits.fetch_add(1, Ordering::Relaxed);
                    }
                    let _ = role.permissions();
                }
            });
        }
    });

    assert_eq!(reader_hits.load(Ordering::Relaxed), 4 * PER_WRITER);
    // Even indices survive, plus the stable grant
    assert_eq!(role.permissions().len(), WRITERS * PER_WRITER / 2 + 1);
}

#[test]
fn test_parallel_deny_and_permit() {
    let role = PermitDenyRole::new("shared");
    role.assign(LayerPermission::new("res").into_ref()).unwrap();

    (0..1000usize).into_par_iter().for_each(|i| {
        let p = LayerPermission::new(format!("res:{}", i));
        if i % 3 == 0 {
            role.deny(p.into_ref()).unwrap();
        } else {
            assert!(role.permit(&p));
        }
    });

    assert_eq!(role.denials().len(), (0..1000).filter(|i| i % 3 == 0).count());
    for i in (0..1000).step_by(3) {
        assert!(!role.permit(&LayerPermission::new(format!("res:{}", i))));
    }
}

#[test]
fn test_snapshot_is_independent() {
    let role = PermitDenyRole::new("shared");
    role.assign(StdPermission::new("a").into_ref()).unwrap();

    let snapshot = role.permissions();
    role.assign(StdPermission::new("b").into_ref()).unwrap();
    role.revoke(&StdPermission::new("a")).unwrap();

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].id(), "a");
    assert_eq!(role.permissions()[0].id(), "b");
}
