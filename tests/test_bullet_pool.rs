use galaga_shooter::bullet::Bullet;
use galaga_shooter::bullet_pool::BulletPool;
use galaga_shooter::entities::BulletOwner;
use galaga_shooter::geometry::{GameObject, Position, Size, Vec2};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn field() -> Size {
    Size::new(800.0, 600.0)
}

fn fire(pool: &mut BulletPool) -> galaga_shooter::bullet_pool::BulletHandle {
    pool.acquire(Vec2::new(100.0, 300.0), BulletOwner::Player, 500.0, 1, 0.0)
}

// ── Acquire / release ─────────────────────────────────────────────────────────

#[test]
fn new_pool_has_no_active_bullets() {
    let pool = BulletPool::new(150, field());
    assert_eq!(pool.total_count(), 150);
    assert_eq!(pool.active_count(), 0);
}

#[test]
fn acquire_activates_and_resets() {
    let mut pool = BulletPool::new(4, field());
    let h = pool.acquire(Vec2::new(10.0, 20.0), BulletOwner::Enemy, 250.0, 1, 0.0);
    let bullet = pool.get(h).unwrap();
    assert!(bullet.is_active());
    assert_eq!(bullet.owner(), BulletOwner::Enemy);
    assert_eq!(bullet.body().position, Vec2::new(10.0, 20.0));
    assert_eq!(bullet.body().velocity, Vec2::new(0.0, 250.0));
    assert_eq!(pool.active_count(), 1);
}

#[test]
fn released_slot_is_reused_before_growing() {
    let mut pool = BulletPool::new(2, field());
    let a = fire(&mut pool);
    let _b = fire(&mut pool);
    pool.release(a);
    let c = fire(&mut pool);
    assert_eq!(c.index(), a.index());
    assert_eq!(pool.total_count(), 2);
}

#[test]
fn stale_handle_cannot_reach_new_occupant() {
    let mut pool = BulletPool::new(1, field());
    let a = fire(&mut pool);
    pool.release(a);
    let b = fire(&mut pool);
    assert_eq!(a.index(), b.index());
    assert!(!pool.is_live(a));
    assert!(pool.get(a).is_none());
    // Releasing the stale handle leaves the new bullet alone.
    pool.release(a);
    assert!(pool.is_live(b));
    assert_eq!(pool.active_count(), 1);
}

#[test]
fn exhausted_pool_grows_by_one() {
    let mut pool = BulletPool::new(2, field());
    fire(&mut pool);
    fire(&mut pool);
    let third = fire(&mut pool);
    assert_eq!(pool.total_count(), 3);
    assert_eq!(pool.active_count(), 3);
    assert!(pool.is_live(third));
}

#[test]
fn release_all_returns_everything() {
    let mut pool = BulletPool::new(5, field());
    let handles: Vec<_> = (0..5).map(|_| fire(&mut pool)).collect();
    pool.release_all();
    assert_eq!(pool.active_count(), 0);
    assert!(handles.iter().all(|&h| !pool.is_live(h)));
    // No growth needed afterwards.
    for _ in 0..5 {
        fire(&mut pool);
    }
    assert_eq!(pool.total_count(), 5);
}

#[test]
fn active_never_exceeds_total_under_random_traffic() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut pool = BulletPool::new(8, field());
    let mut live = Vec::new();
    for _ in 0..2000 {
        if live.is_empty() || rng.gen_bool(0.55) {
            let before = pool.total_count();
            let all_busy = live.len() == before;
            live.push(fire(&mut pool));
            if !all_busy {
                assert_eq!(pool.total_count(), before, "grew with a free slot available");
            }
        } else {
            let i = rng.gen_range(0..live.len());
            pool.release(live.swap_remove(i));
        }
        assert!(pool.active_count() <= pool.total_count());
        assert_eq!(pool.active_count(), live.len());
    }
}

// ── Bullet behaviour ──────────────────────────────────────────────────────────

#[test]
fn size_scales_with_power_tier() {
    assert_eq!(Bullet::size_for(1), Size::new(4.0, 8.0));
    assert_eq!(Bullet::size_for(2), Size::new(6.0, 12.0));
    assert_eq!(Bullet::size_for(3), Size::new(8.0, 16.0));
}

#[test]
fn player_damage_tracks_power_level() {
    let mut pool = BulletPool::new(2, field());
    let p = pool.acquire(Position::ZERO, BulletOwner::Player, 500.0, 3, 0.0);
    let e = pool.acquire(Position::ZERO, BulletOwner::Enemy, 500.0, 3, 0.0);
    assert_eq!(pool.get(p).unwrap().damage(), 3);
    assert_eq!(pool.get(e).unwrap().damage(), 1);
}

#[test]
fn angled_shot_uses_clockwise_from_up() {
    let bullet = Bullet::new(
        Position::ZERO,
        BulletOwner::Enemy,
        100.0,
        1,
        std::f32::consts::PI,
        field(),
    );
    let v = bullet.body().velocity;
    assert!(v.x.abs() < 1e-3);
    assert!((v.y - 100.0).abs() < 1e-3);
}

#[test]
fn bullet_deactivates_past_margin() {
    let mut bullet = Bullet::new(Vec2::new(400.0, 10.0), BulletOwner::Player, 500.0, 1, 0.0, field());
    bullet.update(0.1); // y = -40
    assert!(bullet.is_active());
    bullet.update(0.1); // y = -90
    assert!(!bullet.is_active());
}
