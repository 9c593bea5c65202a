//! Overlap tests between the actor and world geometry
//!
//! Both tests are deliberately coarse:
//! - Platforms only catch the actor from above, inside a landing band one
//!   actor-height deep below the platform top. There is no wall or underside
//!   collision.
//! - Coins are treated as boxes with half extent = radius, not circles.

use super::state::{Actor, Coin, Platform};

/// True when the actor spans the platform horizontally and its lower edge is
/// inside the landing band `(platform.y, platform.y + actor height]`
pub fn landing_on(actor: &Actor, platform: &Platform) -> bool {
    let bottom = actor.bottom();
    actor.left() < platform.right()
        && actor.right() > platform.x
        && bottom > platform.y
        && bottom <= platform.y + actor.size.y
}

/// Box-vs-box test using the coin's radius as a half extent
pub fn coin_overlaps(actor: &Actor, coin: &Coin) -> bool {
    let r = coin.radius;
    actor.left() < coin.pos.x + r
        && actor.right() > coin.pos.x - r
        && actor.top() < coin.pos.y + r
        && actor.bottom() > coin.pos.y - r
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn actor_at(x: f64, y: f64) -> Actor {
        Actor {
            pos: DVec2::new(x, y),
            ..Default::default()
        }
    }

    #[test]
    fn test_landing_band_edges() {
        let platform = Platform::new(100.0, 300.0, 200.0, 20.0);

        // Bottom exactly on the top edge is not inside the band
        assert!(!landing_on(&actor_at(150.0, 250.0), &platform));
        // Just below the top edge
        assert!(landing_on(&actor_at(150.0, 250.5), &platform));
        // Bottom exactly one actor-height below the top is still inside
        assert!(landing_on(&actor_at(150.0, 300.0), &platform));
        // Past the band
        assert!(!landing_on(&actor_at(150.0, 300.5), &platform));
    }

    #[test]
    fn test_landing_band_is_deeper_than_platform() {
        // The band is sized by the actor, not the platform: an actor whose
        // bottom is 40 units under a 20-unit platform top still lands
        let platform = Platform::new(100.0, 300.0, 200.0, 20.0);
        assert!(landing_on(&actor_at(150.0, 290.0), &platform));
    }

    #[test]
    fn test_landing_needs_horizontal_overlap() {
        let platform = Platform::new(100.0, 300.0, 200.0, 20.0);

        // Right edge touching the platform's left edge is not an overlap
        assert!(!landing_on(&actor_at(60.0, 260.0), &platform));
        assert!(landing_on(&actor_at(61.0, 260.0), &platform));
        // Left edge touching the platform's right edge
        assert!(!landing_on(&actor_at(300.0, 260.0), &platform));
        assert!(landing_on(&actor_at(299.0, 260.0), &platform));
    }

    #[test]
    fn test_coin_box_overlap() {
        let coin = Coin::new(150.0, 270.0);

        assert!(coin_overlaps(&actor_at(151.0, 250.0), &coin));
        // Box corners count even though a real circle would miss
        assert!(coin_overlaps(&actor_at(159.0, 279.0), &coin));
        // Touching edges do not overlap
        assert!(!coin_overlaps(&actor_at(160.0, 250.0), &coin));
        assert!(!coin_overlaps(&actor_at(100.0, 250.0), &coin));
        assert!(!coin_overlaps(&actor_at(151.0, 280.0), &coin));
        assert!(!coin_overlaps(&actor_at(151.0, 210.0), &coin));
    }
}
