//! Property tests for the refinement rule and order validation.
#[cfg(test)]
mod tests {
    use hilbertfork::{Cap, MAX_ORDER, Order, Point, cap_to_fork, caps_from_path, finegrain};
    use proptest::prelude::*;

    /// Unit vectors along the axes.
    const AXES: [Point; 4] = [
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(-1.0, 0.0),
        Point::new(0.0, -1.0),
    ];

    /// An axis‑aligned cap on a dyadic grid in any rotation or reflection.
    ///
    /// `D - A` runs along `AXES[along]` and `B - A` along a perpendicular
    /// axis, chosen by `flip`.
    fn cap_strategy() -> impl Strategy<Value = Cap> {
        (-64i32..64, -64i32..64, 0u32..6, 0usize..4, any::<bool>()).prop_map(
            |(ox, oy, shift, along, flip)| {
                let side = 1.0 / f64::from(1u32 << shift);
                let a = Point::new(f64::from(ox) / 64.0, f64::from(oy) / 64.0);
                let u = AXES[along] * side;
                let v = AXES[(along + if flip { 1 } else { 3 }) % 4] * side;
                [a, a + v, a + u + v, a + u]
            },
        )
    }

    proptest! {
        #[test]
        fn fork_steps_are_axis_aligned(cap in cap_strategy()) {
            let step = cap[0].distance(&cap[3]) / 2.0;
            let fork = cap_to_fork(&cap);
            for w in fork.windows(2) {
                let dx = (w[1].x - w[0].x).abs();
                let dy = (w[1].y - w[0].y).abs();
                prop_assert!(
                    (dx == step && dy == 0.0) || (dx == 0.0 && dy == step),
                    "{:?} -> {:?} is not a single step of {}", w[0], w[1], step
                );
            }
        }

        #[test]
        fn fork_is_self_avoiding(cap in cap_strategy()) {
            let fork = cap_to_fork(&cap);
            for (i, p) in fork.iter().enumerate() {
                prop_assert!(!fork[i + 1..].contains(p));
            }
        }

        #[test]
        fn fork_fills_cap_square(cap in cap_strategy()) {
            // The cap's corners are cell centres of a 2×2 grid; the fork's
            // points are cell centres of the 4×4 grid over the same square.
            let min_x = cap.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
            let max_x = cap.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
            let min_y = cap.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
            let max_y = cap.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
            let pad = (max_x - min_x) / 4.0;
            for p in cap_to_fork(&cap) {
                prop_assert!(p.x >= min_x - pad && p.x <= max_x + pad, "{:?}", p);
                prop_assert!(p.y >= min_y - pad && p.y <= max_y + pad, "{:?}", p);
            }
        }

        #[test]
        fn finegrain_concatenates_forks(caps in prop::collection::vec(cap_strategy(), 0..8)) {
            let path: Vec<Point> = caps.concat();
            let refined = finegrain(&path);
            prop_assert_eq!(refined.len(), path.len() * 4);
            for (cap, fork) in caps_from_path(&path).zip(refined.chunks_exact(16)) {
                prop_assert_eq!(&cap_to_fork(&cap)[..], fork);
            }
        }

        #[test]
        fn negative_orders_rejected(n in i64::MIN..0) {
            prop_assert!(Order::try_from(n).is_err());
        }

        #[test]
        fn fractional_orders_rejected(whole in 0u32..20, frac in 0.01f64..0.99) {
            prop_assert!(Order::try_from(f64::from(whole) + frac).is_err());
        }

        #[test]
        fn valid_orders_parse(n in 0u32..=MAX_ORDER) {
            prop_assert_eq!(n.to_string().parse::<Order>(), Order::new(n));
            prop_assert_eq!(Order::try_from(f64::from(n)), Order::new(n));
        }
    }
}
