use crate::geometry::clamp01;

/// Per-frame smoothing factor for the chase toward the pointer target.
const EASE: f64 = 0.08;
/// Maximum shift of a blob away from its base anchor, in percent.
const MAX_SHIFT: f64 = 8.0;

/// Base anchor position and per-axis sensitivity of one fog blob.
#[derive(Debug, Clone, Copy)]
pub struct BlobAnchor {
    pub base_x: f64,
    pub base_y: f64,
    pub mul_x: f64,
    pub mul_y: f64,
}

/// The three gradient blobs, back to front.
pub const BLOB_ANCHORS: [BlobAnchor; 3] = [
    BlobAnchor {
        base_x: 15.0,
        base_y: 20.0,
        mul_x: 1.0,
        mul_y: 0.9,
    },
    BlobAnchor {
        base_x: 80.0,
        base_y: 30.0,
        mul_x: 0.8,
        mul_y: 0.7,
    },
    BlobAnchor {
        base_x: 50.0,
        base_y: 80.0,
        mul_x: 0.6,
        mul_y: 0.8,
    },
];

/// Smoothed 2D point in [0,1]² chasing the latest pointer sample.
/// Stepped once per animation frame, never persisted.
#[derive(Debug, Clone, Copy)]
pub struct FogField {
    current_x: f64,
    current_y: f64,
    target_x: f64,
    target_y: f64,
}

impl Default for FogField {
    fn default() -> Self {
        Self {
            current_x: 0.5,
            current_y: 0.5,
            target_x: 0.5,
            target_y: 0.5,
        }
    }
}

impl FogField {
    pub fn current(&self) -> (f64, f64) {
        (self.current_x, self.current_y)
    }

    /// Records a pointer sample normalized against the viewport; the
    /// target is clamped so the field always stays in [0,1]².
    pub fn set_target(&mut self, x: f64, y: f64, viewport_width: f64, viewport_height: f64) {
        self.target_x = clamp01(x / viewport_width.max(1.0));
        self.target_y = clamp01(y / viewport_height.max(1.0));
    }

    /// One frame of exponential smoothing toward the target.
    pub fn step(&mut self) {
        self.current_x += (self.target_x - self.current_x) * EASE;
        self.current_y += (self.target_y - self.current_y) * EASE;
    }

    /// Rendered blob positions for this frame, in percent of the fog
    /// surface: base anchor plus the normalized offset scaled by the
    /// blob's per-axis sensitivity.
    pub fn blob_positions(&self) -> [(f64, f64); 3] {
        let nx = (self.current_x - 0.5) * 2.0;
        let ny = (self.current_y - 0.5) * 2.0;
        let mut positions = [(0.0, 0.0); 3];
        for (slot, anchor) in positions.iter_mut().zip(BLOB_ANCHORS.iter()) {
            *slot = (
                anchor.base_x + nx * MAX_SHIFT * anchor.mul_x,
                anchor.base_y + ny * MAX_SHIFT * anchor.mul_y,
            );
        }
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_field_renders_blobs_at_their_anchors() {
        let field = FogField::default();
        let positions = field.blob_positions();
        assert_eq!(positions[0], (15.0, 20.0));
        assert_eq!(positions[1], (80.0, 30.0));
        assert_eq!(positions[2], (50.0, 80.0));
    }

    #[test]
    fn field_monotonically_approaches_a_held_target() {
        let mut field = FogField::default();
        field.set_target(1000.0, 800.0, 1000.0, 800.0);

        let mut previous = field.current();
        for _ in 0..200 {
            field.step();
            let (cx, cy) = field.current();
            assert!(cx >= previous.0 && cy >= previous.1);
            assert!(cx <= 1.0 && cy <= 1.0);
            previous = (cx, cy);
        }
        let (cx, cy) = field.current();
        assert!(cx > 0.99 && cy > 0.99);
    }

    #[test]
    fn targets_are_clamped_into_the_unit_square() {
        let mut field = FogField::default();
        field.set_target(-50.0, 2000.0, 1000.0, 800.0);
        for _ in 0..500 {
            field.step();
        }
        let (cx, cy) = field.current();
        assert!((0.0..=1.0).contains(&cx));
        assert!((0.0..=1.0).contains(&cy));
        assert!(cx < 0.01 && cy > 0.99);
    }

    #[test]
    fn full_deflection_moves_blobs_by_their_axis_sensitivity() {
        let mut field = FogField::default();
        field.set_target(1000.0, 800.0, 1000.0, 800.0);
        for _ in 0..2000 {
            field.step();
        }
        let positions = field.blob_positions();
        // nx and ny converge to 1, so each blob sits at base + 8 * mul
        assert!((positions[0].0 - 23.0).abs() < 0.01);
        assert!((positions[0].1 - 27.2).abs() < 0.01);
        assert!((positions[1].0 - 86.4).abs() < 0.01);
        assert!((positions[2].1 - 86.4).abs() < 0.01);
    }
}
