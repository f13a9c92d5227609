//! Dominant gravity source selection.

use glam::DVec2;

use gravity_core::math::distance;
use gravity_core::types::GravitySource;

/// Pick the closest source whose zone of effect contains `subject`.
///
/// Sources outside their own radius are skipped even when they are the
/// globally nearest. Ties go to the first source in iteration order, so
/// callers must pass sources in a stable order for reproducible results.
pub fn select(subject: DVec2, sources: &[GravitySource]) -> Option<GravitySource> {
    let mut closest: Option<GravitySource> = None;
    let mut closest_dist_sq = f64::INFINITY;

    for source in sources {
        // Eligibility uses the true distance, ranking the squared one.
        if distance(subject, source.position) > source.radius_of_effect {
            continue;
        }

        let dist_sq = subject.distance_squared(source.position);
        if dist_sq < closest_dist_sq {
            closest_dist_sq = dist_sq;
            closest = Some(*source);
        }
    }

    closest
}
