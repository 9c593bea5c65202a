//! Procedural world extension
//!
//! Keeps one platform (and its coin) ahead of the actor. At most one platform
//! is added per tick. Platforms and coins are never removed here, so the
//! world grows for as long as the session runs.

use rand::Rng;

use super::state::{Coin, Platform, World};
use crate::consts::*;

/// Append a new platform and coin if the actor is within the lookahead
/// distance of the generation cursor.
///
/// Returns the index of the new platform when the generator fired.
pub fn extend_world<R: Rng + ?Sized>(world: &mut World, rng: &mut R) -> Option<usize> {
    if world.actor.pos.x <= world.last_platform_x - GENERATION_LOOKAHEAD {
        return None;
    }

    let x = world.last_platform_x + rng.random_range(PLATFORM_GAP_MIN..PLATFORM_GAP_MAX);
    let y = rng.random_range(PLATFORM_Y_MIN..PLATFORM_Y_MAX);
    world
        .platforms
        .push(Platform::new(x, y, PLATFORM_WIDTH, PLATFORM_HEIGHT));

    let coin_x = x + rng.random_range(0.0..COIN_SPREAD);
    world.coins.push(Coin::new(coin_x, y - COIN_LIFT));

    log::debug!(
        "Generated platform #{} at ({:.1}, {:.1}), cursor {:.1} -> {:.1}",
        world.platforms.len(),
        x,
        y,
        world.last_platform_x,
        x
    );
    world.last_platform_x = x;

    Some(world.platforms.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_no_generation_far_from_cursor() {
        let mut world = World::new();
        let mut rng = Pcg32::seed_from_u64(1);

        // Actor at 50, cursor at 700: 50 <= 300, nothing happens
        assert_eq!(extend_world(&mut world, &mut rng), None);
        assert_eq!(world.platforms.len(), 3);
        assert_eq!(world.coins.len(), 3);

        // Exactly on the threshold still does not fire
        world.actor.pos.x = 300.0;
        assert_eq!(extend_world(&mut world, &mut rng), None);
    }

    #[test]
    fn test_generation_appends_platform_and_coin() {
        let mut world = World::new();
        let mut rng = Pcg32::seed_from_u64(7);
        world.actor.pos.x = 301.0;

        assert_eq!(extend_world(&mut world, &mut rng), Some(3));
        assert_eq!(world.platforms.len(), 4);
        assert_eq!(world.coins.len(), 4);

        let platform = world.platforms[3];
        let coin = world.coins[3];
        assert_eq!(world.last_platform_x, platform.x);
        assert!(platform.x >= 900.0 && platform.x < 1100.0);
        assert!(platform.y >= 150.0 && platform.y < 300.0);
        assert_eq!(platform.width, PLATFORM_WIDTH);
        assert_eq!(platform.height, PLATFORM_HEIGHT);

        assert!(coin.pos.x >= platform.x && coin.pos.x < platform.x + COIN_SPREAD);
        assert_eq!(coin.pos.y, platform.y - COIN_LIFT);
        assert_eq!(coin.radius, COIN_RADIUS);
        assert!(!coin.collected);
    }

    #[test]
    fn test_fires_once_per_call() {
        // Even far past the cursor only one platform is added per call
        let mut world = World::new();
        let mut rng = Pcg32::seed_from_u64(3);
        world.actor.pos.x = 5000.0;

        extend_world(&mut world, &mut rng);
        assert_eq!(world.platforms.len(), 4);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let mut a = World::new();
        let mut b = World::new();
        a.actor.pos.x = 5000.0;
        b.actor.pos.x = 5000.0;
        let mut rng_a = Pcg32::seed_from_u64(99);
        let mut rng_b = Pcg32::seed_from_u64(99);

        for _ in 0..10 {
            extend_world(&mut a, &mut rng_a);
            extend_world(&mut b, &mut rng_b);
        }
        assert_eq!(a.platforms, b.platforms);
        assert_eq!(a.coins, b.coins);
    }

    proptest! {
        #[test]
        fn prop_cursor_advances_within_gap(seed in any::<u64>(), steps in 1usize..20) {
            let mut world = World::new();
            world.actor.pos.x = 1.0e6;
            let mut rng = Pcg32::seed_from_u64(seed);

            for _ in 0..steps {
                let before = world.last_platform_x;
                prop_assert!(extend_world(&mut world, &mut rng).is_some());
                let advance = world.last_platform_x - before;
                prop_assert!(advance >= PLATFORM_GAP_MIN);
                prop_assert!(advance < PLATFORM_GAP_MAX);
            }
        }

        #[test]
        fn prop_far_cursor_keeps_gap_and_coin_spread(seed in any::<u64>(), steps in 1usize..50) {
            let mut world = World::new();
            world.last_platform_x = 1.0e6;
            world.actor.pos.x = 1.0e6;
            let mut rng = Pcg32::seed_from_u64(seed);

            for _ in 0..steps {
                world.actor.pos.x = world.last_platform_x;
                let before = world.last_platform_x;
                let index = extend_world(&mut world, &mut rng);
                prop_assert!(index.is_some());

                let advance = world.last_platform_x - before;
                prop_assert!(advance >= PLATFORM_GAP_MIN);
                prop_assert!(advance < PLATFORM_GAP_MAX);

                let platform = world.platforms[world.platforms.len() - 1];
                let coin = world.coins[world.coins.len() - 1];
                prop_assert!(coin.pos.x >= platform.x);
                prop_assert!(coin.pos.x < platform.x + COIN_SPREAD);
                prop_assert_eq!(coin.pos.y, platform.y - COIN_LIFT);
            }
        }
    }
}
