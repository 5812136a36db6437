use crate::math::vector_2d::{mirror, mirror_with_length};
use crate::math::{Point2, Vector2};

/// Mirroring policy coupling an anchor's two control handles.
///
/// The policy governs what happens to the opposite handle when one
/// handle is set; it has no effect on handles already in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandleMirror {
    /// No coupling; the default for newly created anchors.
    #[default]
    None,
    /// Handles are deliberately independent (a sharp or broken corner).
    Free,
    /// Handles stay point-symmetric: same length, opposite direction.
    Mirror,
    /// Handles stay opposite in direction while each keeps its own
    /// length, giving tangent continuity without forced symmetry.
    MirrorAngle,
}

/// A single editable point on a path, with optional incoming and
/// outgoing Bezier control-handle offsets.
///
/// Handle offsets are relative to `position`; an absent handle means no
/// curvature on that side. The handle fields are private so that every
/// mutation goes through [`Anchor::set_in_handle`] and
/// [`Anchor::set_out_handle`], which keep the two handles consistent
/// with the [`HandleMirror`] policy.
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    /// Location of the anchor.
    pub position: Point2,
    /// Policy applied when either handle is set.
    pub mirror: HandleMirror,
    /// Corner-rounding radius, carried for downstream rendering.
    pub radius: f64,
    in_handle: Option<Vector2>,
    out_handle: Option<Vector2>,
}

impl Anchor {
    /// Creates a corner anchor with no handles.
    #[must_use]
    pub fn new(position: Point2) -> Self {
        Self {
            position,
            mirror: HandleMirror::None,
            radius: 0.0,
            in_handle: None,
            out_handle: None,
        }
    }

    /// Creates an anchor with explicit handle offsets.
    ///
    /// The mirroring policy is not applied to the supplied offsets; it
    /// only governs later setter calls.
    #[must_use]
    pub fn with_handles(
        position: Point2,
        in_handle: Option<Vector2>,
        out_handle: Option<Vector2>,
    ) -> Self {
        Self {
            position,
            mirror: HandleMirror::None,
            radius: 0.0,
            in_handle,
            out_handle,
        }
    }

    /// Returns the incoming handle offset, if any.
    #[must_use]
    pub fn in_handle(&self) -> Option<Vector2> {
        self.in_handle
    }

    /// Returns the outgoing handle offset, if any.
    #[must_use]
    pub fn out_handle(&self) -> Option<Vector2> {
        self.out_handle
    }

    /// Sets the incoming handle and applies the mirroring policy to the
    /// outgoing handle.
    ///
    /// - [`HandleMirror::Mirror`]: the outgoing handle becomes the exact
    ///   opposite of `offset`.
    /// - [`HandleMirror::MirrorAngle`]: the outgoing handle points
    ///   opposite `offset` but keeps its prior length, or takes
    ///   `offset`'s length if it did not exist. An `offset` shorter than
    ///   [`TOLERANCE`](crate::math::TOLERANCE) has no direction to
    ///   mirror and leaves the outgoing handle unchanged.
    /// - [`HandleMirror::None`] / [`HandleMirror::Free`]: the outgoing
    ///   handle is untouched.
    pub fn set_in_handle(&mut self, offset: Vector2) {
        self.in_handle = Some(offset);
        match self.mirror {
            HandleMirror::None | HandleMirror::Free => {}
            HandleMirror::Mirror => self.out_handle = Some(mirror(offset)),
            HandleMirror::MirrorAngle => {
                let length = self.out_handle.map_or(offset.norm(), |h| h.norm());
                if let Ok(mirrored) = mirror_with_length(offset, length) {
                    self.out_handle = Some(mirrored);
                }
            }
        }
    }

    /// Sets the outgoing handle and applies the mirroring policy to the
    /// incoming handle; the mirror image of [`Anchor::set_in_handle`].
    pub fn set_out_handle(&mut self, offset: Vector2) {
        self.out_handle = Some(offset);
        match self.mirror {
            HandleMirror::None | HandleMirror::Free => {}
            HandleMirror::Mirror => self.in_handle = Some(mirror(offset)),
            HandleMirror::MirrorAngle => {
                let length = self.in_handle.map_or(offset.norm(), |h| h.norm());
                if let Ok(mirrored) = mirror_with_length(offset, length) {
                    self.in_handle = Some(mirrored);
                }
            }
        }
    }

    /// Retracts both handles, turning the anchor into a sharp corner.
    pub fn clear_handles(&mut self) {
        self.in_handle = None;
        self.out_handle = None;
    }

    /// Returns a copy with the incoming and outgoing handles swapped,
    /// for traversal in the opposite direction.
    ///
    /// Every mirroring policy is symmetric under the swap, so the
    /// handle-consistency invariant is preserved.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            position: self.position,
            mirror: self.mirror,
            radius: self.radius,
            in_handle: self.out_handle,
            out_handle: self.in_handle,
        }
    }
}
