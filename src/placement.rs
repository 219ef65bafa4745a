// Free-region search around an anchor rectangle.
//
// The four sides are generated as an ordered candidate list and folded
// through one comparator, so the whole selection policy sits in a single
// pure function instead of a chain of mutating branches.

use crate::config::PlacementConfig;
use crate::geometry::{Rect, rects_intersect};

/// Which side of the anchor a candidate region sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Above,
    Below,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub side: Side,
    pub rect: Rect,
}

/// The four regions adjacent to `anchor`, clipped to `bounds`, in evaluation
/// order: above, below, left, right. Each spans the anchor on one axis and
/// runs to the bounding box on the other. Extents go negative when the
/// anchor pokes outside the bounds; the comparator never selects those.
pub fn candidate_regions(anchor: Rect, bounds: Rect) -> [Candidate; 4] {
    [
        Candidate {
            side: Side::Above,
            rect: Rect::new(
                anchor.left,
                bounds.top,
                anchor.width,
                anchor.top - bounds.top,
            ),
        },
        Candidate {
            side: Side::Below,
            rect: Rect::new(
                anchor.left,
                anchor.bottom(),
                anchor.width,
                bounds.bottom() - anchor.bottom(),
            ),
        },
        Candidate {
            side: Side::Left,
            rect: Rect::new(
                bounds.left,
                anchor.top,
                anchor.left - bounds.left,
                anchor.height,
            ),
        },
        Candidate {
            side: Side::Right,
            rect: Rect::new(
                anchor.right(),
                anchor.top,
                bounds.right() - anchor.right(),
                anchor.height,
            ),
        },
    ]
}

/// A candidate is eligible only when it overlaps nothing in the occupied set.
fn is_free(rect: Rect, occupied: &[Rect]) -> bool {
    !occupied.iter().any(|other| rects_intersect(rect, *other))
}

#[derive(Debug, Clone, Copy)]
struct Best {
    rect: Rect,
    // Gap between the winning region and the anchor. Every candidate is
    // constructed flush against the anchor, so the first selection records
    // 0 and later sides can no longer displace it.
    distance: f32,
}

impl Best {
    fn none() -> Best {
        Best {
            rect: Rect::ZERO,
            distance: f32::INFINITY,
        }
    }
}

/// Selection policy, applied per candidate in side order: replace the best
/// when the candidate's extent on its search axis (height for above/below,
/// width for left/right) strictly beats the best's extent on that axis and
/// the candidate sits strictly closer to the anchor than the best did.
fn prefer(best: Best, candidate: &Candidate, anchor: Rect) -> Best {
    let (extent, best_extent, distance) = match candidate.side {
        Side::Above => (
            candidate.rect.height,
            best.rect.height,
            anchor.top - candidate.rect.bottom(),
        ),
        Side::Below => (
            candidate.rect.height,
            best.rect.height,
            candidate.rect.top - anchor.bottom(),
        ),
        Side::Left => (
            candidate.rect.width,
            best.rect.width,
            anchor.left - candidate.rect.left,
        ),
        Side::Right => (
            candidate.rect.width,
            best.rect.width,
            candidate.rect.left - anchor.right(),
        ),
    };
    if extent > best_extent && distance < best.distance {
        Best {
            rect: candidate.rect,
            distance,
        }
    } else {
        best
    }
}

/// Find the best unobstructed region adjacent to `anchor` for placing a
/// secondary element (tooltip, side panel, popover).
///
/// `occupied` is the set of rectangles the result must not overlap; callers
/// are expected to exclude the anchor itself. When no side qualifies the
/// zero rect at the origin is returned, which callers must treat as "no free
/// region found". Never panics: degenerate input produces zero or negative
/// candidate extents that simply lose every comparison.
pub fn find_largest_free_region(anchor: Rect, occupied: &[Rect], bounds: Rect) -> Rect {
    candidate_regions(anchor, bounds)
        .iter()
        .filter(|candidate| is_free(candidate.rect, occupied))
        .fold(Best::none(), |best, candidate| {
            prefer(best, candidate, anchor)
        })
        .rect
}

/// `find_largest_free_region` with placement options applied: obstacles are
/// padded by `obstacle_margin` before the search, and a winning region
/// smaller than the configured minimum extents is discarded. Default options
/// reproduce the plain search exactly.
pub fn find_free_region_with(
    anchor: Rect,
    occupied: &[Rect],
    bounds: Rect,
    config: &PlacementConfig,
) -> Rect {
    let region = if config.obstacle_margin > 0.0 {
        let padded: Vec<Rect> = occupied
            .iter()
            .map(|rect| rect.inflate(config.obstacle_margin))
            .collect();
        find_largest_free_region(anchor, &padded, bounds)
    } else {
        find_largest_free_region(anchor, occupied, bounds)
    };
    if region.width < config.min_width || region.height < config.min_height {
        return Rect::ZERO;
    }
    region
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect {
        left: 0.0,
        top: 0.0,
        width: 100.0,
        height: 100.0,
    };

    fn anchor() -> Rect {
        Rect::new(40.0, 40.0, 20.0, 20.0)
    }

    #[test]
    fn candidate_regions_span_anchor_and_bounds() {
        let regions = candidate_regions(anchor(), BOUNDS);
        assert_eq!(regions[0].side, Side::Above);
        assert_eq!(regions[0].rect, Rect::new(40.0, 0.0, 20.0, 40.0));
        assert_eq!(regions[1].side, Side::Below);
        assert_eq!(regions[1].rect, Rect::new(40.0, 60.0, 20.0, 40.0));
        assert_eq!(regions[2].side, Side::Left);
        assert_eq!(regions[2].rect, Rect::new(0.0, 40.0, 40.0, 20.0));
        assert_eq!(regions[3].side, Side::Right);
        assert_eq!(regions[3].rect, Rect::new(60.0, 40.0, 40.0, 20.0));
    }

    #[test]
    fn empty_occupied_set_picks_above() {
        let result = find_largest_free_region(anchor(), &[], BOUNDS);
        assert_eq!(result, Rect::new(40.0, 0.0, 20.0, 40.0));
    }

    #[test]
    fn blocked_above_falls_through_to_below() {
        let occupied = [Rect::new(40.0, 10.0, 20.0, 20.0)];
        let result = find_largest_free_region(anchor(), &occupied, BOUNDS);
        assert_eq!(result, Rect::new(40.0, 60.0, 20.0, 40.0));
    }

    #[test]
    fn blocked_above_and_below_falls_through_to_left() {
        let occupied = [
            Rect::new(40.0, 10.0, 20.0, 20.0),
            Rect::new(40.0, 70.0, 20.0, 20.0),
        ];
        let result = find_largest_free_region(anchor(), &occupied, BOUNDS);
        assert_eq!(result, Rect::new(0.0, 40.0, 40.0, 20.0));
    }

    #[test]
    fn only_right_free() {
        let occupied = [
            Rect::new(40.0, 10.0, 20.0, 20.0),
            Rect::new(40.0, 70.0, 20.0, 20.0),
            Rect::new(10.0, 40.0, 20.0, 20.0),
        ];
        let result = find_largest_free_region(anchor(), &occupied, BOUNDS);
        assert_eq!(result, Rect::new(60.0, 40.0, 40.0, 20.0));
    }

    #[test]
    fn fully_blocked_returns_zero_rect() {
        // One obstacle per side, each covering its whole candidate region.
        let occupied = [
            Rect::new(40.0, 0.0, 20.0, 40.0),
            Rect::new(40.0, 60.0, 20.0, 40.0),
            Rect::new(0.0, 40.0, 40.0, 20.0),
            Rect::new(60.0, 40.0, 40.0, 20.0),
        ];
        let result = find_largest_free_region(anchor(), &occupied, BOUNDS);
        assert_eq!(result, Rect::ZERO);
    }

    #[test]
    fn zero_area_occupant_does_not_block_a_candidate() {
        // A degenerate marker rect sitting inside the "above" region has no
        // area and must not disqualify it.
        let occupied = [Rect::new(50.0, 20.0, 0.0, 0.0)];
        let result = find_largest_free_region(anchor(), &occupied, BOUNDS);
        assert_eq!(result, Rect::new(40.0, 0.0, 20.0, 40.0));
    }

    #[test]
    fn obstacle_touching_a_candidate_edge_does_not_block_it() {
        // Sits flush against the right edge of the "above" region. Touching
        // edges share no area, so above must stay eligible.
        let occupied = [Rect::new(60.0, 0.0, 20.0, 40.0)];
        let result = find_largest_free_region(anchor(), &occupied, BOUNDS);
        assert_eq!(result, Rect::new(40.0, 0.0, 20.0, 40.0));
    }

    #[test]
    fn above_keeps_priority_over_wider_sides() {
        // Left and right candidates are 40 wide vs above's 20, but above is
        // evaluated first and records distance 0, so they cannot displace it.
        let result = find_largest_free_region(anchor(), &[], BOUNDS);
        assert_eq!(result, Rect::new(40.0, 0.0, 20.0, 40.0));
    }

    #[test]
    fn result_is_idempotent() {
        let occupied = [Rect::new(40.0, 10.0, 20.0, 20.0)];
        let first = find_largest_free_region(anchor(), &occupied, BOUNDS);
        let second = find_largest_free_region(anchor(), &occupied, BOUNDS);
        assert_eq!(first, second);
    }

    #[test]
    fn result_stays_within_bounds() {
        let scenarios: [&[Rect]; 4] = [
            &[],
            &[Rect::new(40.0, 10.0, 20.0, 20.0)],
            &[
                Rect::new(40.0, 10.0, 20.0, 20.0),
                Rect::new(40.0, 70.0, 20.0, 20.0),
            ],
            &[
                Rect::new(40.0, 10.0, 20.0, 20.0),
                Rect::new(40.0, 70.0, 20.0, 20.0),
                Rect::new(10.0, 40.0, 20.0, 20.0),
            ],
        ];
        for occupied in scenarios {
            let result = find_largest_free_region(anchor(), occupied, BOUNDS);
            assert!(!result.is_empty(), "expected a usable region");
            assert!(
                BOUNDS.contains_rect(&result),
                "result {result:?} escapes bounds"
            );
        }
    }

    #[test]
    fn anchor_at_bounds_top_skips_degenerate_above() {
        let flush_top = Rect::new(40.0, 0.0, 20.0, 20.0);
        let result = find_largest_free_region(flush_top, &[], BOUNDS);
        // Above has height 0 and loses to below.
        assert_eq!(result, Rect::new(40.0, 20.0, 20.0, 80.0));
    }

    #[test]
    fn anchor_larger_than_bounds_yields_zero_rect() {
        let oversized = Rect::new(-10.0, -10.0, 120.0, 120.0);
        let result = find_largest_free_region(oversized, &[], BOUNDS);
        assert_eq!(result, Rect::ZERO);
    }

    #[test]
    fn negative_bounds_yield_zero_rect() {
        let bounds = Rect::new(0.0, 0.0, -50.0, -50.0);
        let flush_origin = Rect::new(0.0, 0.0, 20.0, 20.0);
        let result = find_largest_free_region(flush_origin, &[], bounds);
        assert_eq!(result, Rect::ZERO);
    }

    #[test]
    fn default_config_matches_plain_search() {
        let config = PlacementConfig::default();
        let occupied = [Rect::new(40.0, 10.0, 20.0, 20.0)];
        assert_eq!(
            find_free_region_with(anchor(), &occupied, BOUNDS, &config),
            find_largest_free_region(anchor(), &occupied, BOUNDS),
        );
    }

    #[test]
    fn obstacle_margin_blocks_near_misses() {
        // Obstacle clears the "above" region by 1px; a 2px margin closes
        // that gap and pushes the result below.
        let occupied = [Rect::new(61.0, 0.0, 20.0, 40.0)];
        let loose = PlacementConfig::default();
        let strict = PlacementConfig {
            obstacle_margin: 2.0,
            ..PlacementConfig::default()
        };
        assert_eq!(
            find_free_region_with(anchor(), &occupied, BOUNDS, &loose),
            Rect::new(40.0, 0.0, 20.0, 40.0),
        );
        assert_eq!(
            find_free_region_with(anchor(), &occupied, BOUNDS, &strict),
            Rect::new(40.0, 60.0, 20.0, 40.0),
        );
    }

    #[test]
    fn minimum_extent_discards_small_winners() {
        let config = PlacementConfig {
            min_width: 30.0,
            ..PlacementConfig::default()
        };
        // Above wins the plain search at 20 wide, under the minimum.
        let result = find_free_region_with(anchor(), &[], BOUNDS, &config);
        assert_eq!(result, Rect::ZERO);
    }
}
