//! Fixed-capacity bullet arena.
//!
//! The pool owns every `Bullet`.  Callers hold a [`BulletHandle`] while the
//! bullet is in flight and must hand it back through [`BulletPool::release`]
//! when it dies.  Handles carry a generation, so a handle that outlives its
//! release can never reach the slot's next occupant.

use tracing::warn;

use crate::bullet::Bullet;
use crate::entities::BulletOwner;
use crate::geometry::{GameObject, Position, Size};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BulletHandle {
    index: u32,
    generation: u32,
}

impl BulletHandle {
    pub fn index(&self) -> usize {
        self.index as usize
    }
}

pub struct BulletPool {
    slots: Vec<Bullet>,
    generations: Vec<u32>,
    in_use: Vec<bool>,
    /// Free slot indices; the most recently released slot is reused first.
    free: Vec<u32>,
    field: Size,
}

impl BulletPool {
    /// Pre-build `capacity` inactive bullets for a play-field of `field`.
    pub fn new(capacity: usize, field: Size) -> Self {
        let slots = (0..capacity)
            .map(|_| {
                let mut b = Bullet::new(Position::ZERO, BulletOwner::Player, 0.0, 1, 0.0, field);
                b.deactivate();
                b
            })
            .collect();
        Self {
            slots,
            generations: vec![0; capacity],
            in_use: vec![false; capacity],
            free: (0..capacity as u32).rev().collect(),
            field,
        }
    }

    /// Hand out a reset, active bullet.  When every slot is taken the pool
    /// grows by one slot permanently instead of refusing.
    pub fn acquire(
        &mut self,
        position: Position,
        owner: BulletOwner,
        speed: f32,
        power_level: u32,
        angle: f32,
    ) -> BulletHandle {
        if let Some(index) = self.free.pop() {
            let i = index as usize;
            self.slots[i].reset(position, owner, speed, power_level, angle);
            self.in_use[i] = true;
            return BulletHandle {
                index,
                generation: self.generations[i],
            };
        }

        let index = self.slots.len() as u32;
        warn!(
            "Bullet pool exhausted, growing to {} slots",
            self.slots.len() + 1
        );
        self.slots
            .push(Bullet::new(position, owner, speed, power_level, angle, self.field));
        self.generations.push(0);
        self.in_use.push(true);
        BulletHandle {
            index,
            generation: 0,
        }
    }

    /// Deactivate the bullet and free its slot.  Stale or repeated releases
    /// are ignored.
    pub fn release(&mut self, handle: BulletHandle) {
        if !self.is_live(handle) {
            return;
        }
        let i = handle.index();
        self.slots[i].deactivate();
        self.in_use[i] = false;
        self.generations[i] = self.generations[i].wrapping_add(1);
        self.free.push(handle.index);
    }

    /// Return every outstanding slot to the pool.
    pub fn release_all(&mut self) {
        for i in 0..self.slots.len() {
            if self.in_use[i] {
                let handle = BulletHandle {
                    index: i as u32,
                    generation: self.generations[i],
                };
                self.release(handle);
            }
        }
    }

    /// The handle still refers to the slot it was issued for.
    pub fn is_live(&self, handle: BulletHandle) -> bool {
        let i = handle.index();
        i < self.slots.len() && self.in_use[i] && self.generations[i] == handle.generation
    }

    pub fn get(&self, handle: BulletHandle) -> Option<&Bullet> {
        self.is_live(handle).then(|| &self.slots[handle.index()])
    }

    pub fn get_mut(&mut self, handle: BulletHandle) -> Option<&mut Bullet> {
        if self.is_live(handle) {
            Some(&mut self.slots[handle.index()])
        } else {
            None
        }
    }

    /// Bullets currently flying.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|b| b.is_active()).count()
    }

    /// Slots ever built, including growth.
    pub fn total_count(&self) -> usize {
        self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Size {
        Size::new(800.0, 600.0)
    }

    #[test]
    fn free_list_tracks_releases() {
        let mut pool = BulletPool::new(2, field());
        let a = pool.acquire(Position::ZERO, BulletOwner::Player, 500.0, 1, 0.0);
        let b = pool.acquire(Position::ZERO, BulletOwner::Enemy, 250.0, 1, 0.0);
        assert!(pool.free.is_empty());
        pool.release(a);
        pool.release(a);
        assert_eq!(pool.free, vec![a.index]);
        pool.release(b);
        assert_eq!(pool.free.len(), 2);
        assert!(pool.in_use.iter().all(|u| !u));
    }

    #[test]
    fn release_all_clears_self_deactivated_bullets() {
        let mut pool = BulletPool::new(3, field());
        let h = pool.acquire(Position::ZERO, BulletOwner::Player, 500.0, 1, 0.0);
        pool.get_mut(h).unwrap().deactivate();
        pool.release_all();
        assert_eq!(pool.free.len(), 3);
        assert!(!pool.is_live(h));
    }
}
