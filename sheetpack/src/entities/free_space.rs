use crate::geometry::geo_enums::GeoRelation;
use crate::geometry::primitives::{Point, Rect};
use ordered_float::OrderedFloat;

/// Keeps track of the rectangles of a sheet which are still believed to be unoccupied.
///
/// Starts out as a single rectangle covering the whole sheet. Every placement splits the free
/// rectangles it overlaps into up to four fragments, after which dominated rectangles are pruned.
#[derive(Clone, Debug)]
pub struct FreeSpaceTracker {
    free_rects: Vec<Rect>,
}

impl FreeSpaceTracker {
    pub fn new(bbox: Rect) -> Self {
        FreeSpaceTracker {
            free_rects: vec![bbox],
        }
    }

    pub fn free_rects(&self) -> &[Rect] {
        &self.free_rects
    }

    /// Sum of the areas of all tracked free rectangles.
    /// Splitting never produces overlapping fragments, so this equals the truly free area.
    pub fn remaining_area(&self) -> f32 {
        self.free_rects.iter().map(|r| r.area()).sum()
    }

    /// Best-Area-Fit search for a `w` x `h` rectangle.
    ///
    /// Among the free rectangles which can hold it, the one leaving the least area unused
    /// is chosen.
    /// Ties are broken by the shortest leftover side, remaining ties by iteration order.
    /// Returns the top-left corner of the chosen free rectangle.
    pub fn find_position_for(&self, w: f32, h: f32) -> Option<Point> {
        self.free_rects
            .iter()
            .filter(|fr| fr.fits(w, h))
            .min_by_key(|fr| {
                let area_fit = fr.area() - w * h;
                let short_side = f32::min(fr.w - w, fr.h - h);
                (OrderedFloat(area_fit), OrderedFloat(short_side))
            })
            .map(|fr| fr.top_left())
    }

    /// Registers `placed` as occupied: splits every free rectangle it intersects
    /// and prunes afterwards.
    pub fn place(&mut self, placed: Rect) {
        let mut i = 0;
        while i < self.free_rects.len() {
            let fr = self.free_rects[i];
            if !fr.intersects(&placed) {
                i += 1;
                continue;
            }
            self.free_rects.remove(i);
            self.free_rects.extend(split(fr, placed).into_iter().flatten());
        }
        self.prune();
    }

    /// Removes every free rectangle which is fully contained in another one.
    fn prune(&mut self) {
        let mut i = 0;
        while i < self.free_rects.len() {
            let mut j = i + 1;
            let mut removed_i = false;
            while j < self.free_rects.len() {
                match self.free_rects[i].relation_to(&self.free_rects[j]) {
                    GeoRelation::Surrounding => {
                        self.free_rects.remove(j);
                    }
                    GeoRelation::Enclosed => {
                        self.free_rects.remove(i);
                        removed_i = true;
                        break;
                    }
                    GeoRelation::Intersecting | GeoRelation::Disjoint => j += 1,
                }
            }
            if !removed_i {
                i += 1;
            }
        }
    }
}

/// Fragments of `free` which remain unoccupied after `placed` is put on top of it,
/// in the order: above, below, left, right.
/// The left and right fragments only span the rows shared by `free` and `placed`.
fn split(free: Rect, placed: Rect) -> [Option<Rect>; 4] {
    let non_empty = |r: Rect| (r.w > 0.0 && r.h > 0.0).then_some(r);

    let above = (placed.y > free.y && placed.y < free.y_max())
        .then(|| Rect::new(free.x, free.y, free.w, placed.y - free.y))
        .and_then(non_empty);

    let below = (placed.y_max() < free.y_max() && placed.y_max() > free.y)
        .then(|| {
            Rect::new(
                free.x,
                placed.y_max(),
                free.w,
                free.y_max() - placed.y_max(),
            )
        })
        .and_then(non_empty);

    let band_y = f32::max(free.y, placed.y);
    let band_h = f32::min(free.y_max(), placed.y_max()) - band_y;

    let left = (placed.x > free.x && placed.x < free.x_max())
        .then(|| Rect::new(free.x, band_y, placed.x - free.x, band_h))
        .and_then(non_empty);

    let right = (placed.x_max() < free.x_max() && placed.x_max() > free.x)
        .then(|| {
            Rect::new(
                placed.x_max(),
                band_y,
                free.x_max() - placed.x_max(),
                band_h,
            )
        })
        .and_then(non_empty);

    [above, below, left, right]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(w: f32, h: f32) -> FreeSpaceTracker {
        FreeSpaceTracker::new(Rect::new(0.0, 0.0, w, h))
    }

    #[test]
    fn empty_sheet_offers_its_corner() {
        let fst = tracker(500.0, 500.0);
        assert_eq!(fst.remaining_area(), 250_000.0);
        assert_eq!(fst.find_position_for(60.0, 60.0), Some(Point(0.0, 0.0)));
        assert_eq!(fst.find_position_for(500.0, 500.0), Some(Point(0.0, 0.0)));
        assert_eq!(fst.find_position_for(500.1, 10.0), None);
    }

    #[test]
    fn corner_placement_leaves_below_and_right_fragments() {
        let mut fst = tracker(500.0, 500.0);
        fst.place(Rect::new(0.0, 0.0, 60.0, 60.0));
        assert_eq!(
            fst.free_rects(),
            &[
                Rect::new(0.0, 60.0, 500.0, 440.0),
                Rect::new(60.0, 0.0, 440.0, 60.0)
            ]
        );
        assert_eq!(fst.remaining_area(), 250_000.0 - 3600.0);
    }

    #[test]
    fn best_area_fit_prefers_the_tightest_rectangle() {
        let mut fst = tracker(500.0, 500.0);
        fst.place(Rect::new(0.0, 0.0, 60.0, 60.0));
        // the strip to the right of the first item wastes far less area than the space below it
        assert_eq!(fst.find_position_for(60.0, 60.0), Some(Point(60.0, 0.0)));
        // too tall for the strip
        assert_eq!(fst.find_position_for(60.0, 61.0), Some(Point(0.0, 60.0)));
    }

    #[test]
    fn centered_placement_splits_in_four() {
        let mut fst = tracker(100.0, 100.0);
        fst.place(Rect::new(40.0, 40.0, 20.0, 20.0));
        assert_eq!(
            fst.free_rects(),
            &[
                Rect::new(0.0, 0.0, 100.0, 40.0),
                Rect::new(0.0, 60.0, 100.0, 40.0),
                Rect::new(0.0, 40.0, 40.0, 20.0),
                Rect::new(60.0, 40.0, 40.0, 20.0),
            ]
        );
        assert_eq!(fst.remaining_area(), 10_000.0 - 400.0);
    }

    #[test]
    fn untouched_rectangles_keep_their_place() {
        let mut fst = tracker(100.0, 100.0);
        fst.place(Rect::new(0.0, 0.0, 50.0, 50.0));
        fst.place(Rect::new(50.0, 50.0, 10.0, 10.0));
        assert_eq!(
            fst.free_rects(),
            &[
                Rect::new(50.0, 0.0, 50.0, 50.0),
                Rect::new(0.0, 60.0, 100.0, 40.0),
                Rect::new(0.0, 50.0, 50.0, 10.0),
                Rect::new(60.0, 50.0, 40.0, 10.0),
            ]
        );
    }

    #[test]
    fn full_placement_consumes_everything() {
        let mut fst = tracker(100.0, 50.0);
        fst.place(Rect::new(0.0, 0.0, 100.0, 50.0));
        assert!(fst.free_rects().is_empty());
        assert_eq!(fst.remaining_area(), 0.0);
        assert_eq!(fst.find_position_for(1.0, 1.0), None);
    }

    #[test]
    fn ties_fall_back_to_the_short_side_then_to_iteration_order() {
        let fst = FreeSpaceTracker {
            free_rects: vec![
                Rect::new(0.0, 0.0, 20.0, 20.0),
                Rect::new(100.0, 0.0, 40.0, 10.0),
                Rect::new(200.0, 0.0, 40.0, 10.0),
            ],
        };
        // same leftover area (300) everywhere, the strips leave no leftover height
        assert_eq!(fst.find_position_for(10.0, 10.0), Some(Point(100.0, 0.0)));
    }

    #[test]
    fn prune_removes_dominated_rectangles() {
        let mut fst = FreeSpaceTracker {
            free_rects: vec![
                Rect::new(10.0, 10.0, 5.0, 5.0),
                Rect::new(0.0, 0.0, 50.0, 50.0),
                Rect::new(0.0, 0.0, 50.0, 50.0),
                Rect::new(40.0, 40.0, 20.0, 20.0),
                Rect::new(0.0, 0.0, 20.0, 50.0),
            ],
        };
        fst.prune();
        assert_eq!(
            fst.free_rects(),
            &[
                Rect::new(0.0, 0.0, 50.0, 50.0),
                Rect::new(40.0, 40.0, 20.0, 20.0)
            ]
        );
    }

    #[test]
    fn fragments_need_a_positive_extent() {
        let free = Rect::new(0.0, 0.0, 100.0, 100.0);
        let flush_left = Rect::new(0.0, 20.0, 30.0, 80.0);
        let [above, below, left, right] = split(free, flush_left);
        assert_eq!(above, Some(Rect::new(0.0, 0.0, 100.0, 20.0)));
        assert_eq!(below, None);
        assert_eq!(left, None);
        assert_eq!(right, Some(Rect::new(30.0, 20.0, 70.0, 80.0)));
    }
}
