//! Time-boxed markers - created by an event, gone after a fixed lifetime
//! Expiry is polled against elapsed time, so there is no timer to cancel

use glam::Vec3;

/// One live marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransientMarker {
    pub position: Vec3,
    pub created_at: f32,
    pub ttl: f32,
}

impl TransientMarker {
    pub fn new(position: Vec3, created_at: f32, ttl: f32) -> Self {
        Self { position, created_at, ttl }
    }

    pub fn expires_at(&self) -> f32 {
        self.created_at + self.ttl
    }

    pub fn is_expired(&self, now: f32) -> bool {
        now - self.created_at >= self.ttl
    }

    /// Seconds left before eviction, never negative
    pub fn remaining(&self, now: f32) -> f32 {
        (self.ttl - (now - self.created_at)).max(0.0)
    }

}

/// Holds at most one marker; a new trigger replaces the old one outright.
///
/// A trigger without a timestamp is parked as pending and stamped by the
/// next [`commit_pending`](Self::commit_pending), so a click that lands while
/// the host is not ticking still gets its full lifetime.
#[derive(Debug, Clone)]
pub struct MarkerSlot {
    ttl: f32,
    surface_offset: f32,
    current: Option<TransientMarker>,
    pending: Option<Vec3>,
}

impl MarkerSlot {
    /// `surface_offset` lifts the marker off the surface along its normal
    pub fn new(ttl: f32, surface_offset: f32) -> Self {
        Self {
            ttl,
            surface_offset,
            current: None,
            pending: None,
        }
    }

    pub fn current(&self) -> Option<&TransientMarker> {
        self.current.as_ref()
    }

    fn lift(&self, point: Vec3, normal: Vec3) -> Vec3 {
        point + normal.normalize_or_zero() * self.surface_offset
    }

    /// Place a marker at `point` on a surface facing `normal`, created at `now`
    pub fn trigger(&mut self, point: Vec3, normal: Vec3, now: f32) -> TransientMarker {
        self.pending = None;
        self.place(self.lift(point, normal), now)
    }

    /// Queue a marker whose lifetime starts at the next commit
    pub fn request(&mut self, point: Vec3, normal: Vec3) {
        let position = self.lift(point, normal);
        if let Some(old) = self.pending.replace(position) {
            log::debug!("pending marker at {} superseded", old);
        }
    }

    /// Make a queued marker live as of `now`
    pub fn commit_pending(&mut self, now: f32) -> Option<TransientMarker> {
        let position = self.pending.take()?;
        Some(self.place(position, now))
    }

    fn place(&mut self, position: Vec3, now: f32) -> TransientMarker {
        let marker = TransientMarker::new(position, now, self.ttl);

        if let Some(old) = self.current.replace(marker) {
            log::debug!(
                "marker at {} replaced before expiry ({:.2}s left)",
                old.position,
                old.remaining(now)
            );
        }

        marker
    }

    /// Drop the marker once its lifetime is over; returns what was evicted
    pub fn evict_expired(&mut self, now: f32) -> Option<TransientMarker> {
        match self.current {
            Some(marker) if marker.is_expired(now) => {
                log::debug!("marker at {} expired", marker.position);
                self.current.take()
            }
            _ => None,
        }
    }
}
