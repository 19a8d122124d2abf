// src/seeder.rs
//! Orchestrator: walks a possibility schema and fills a bounding box
//! with placements, greedy and single-pass.

use tracing::{debug, trace};

use crate::chooser;
use crate::core::{
    Align, BoundingBox, ChildDef, Direction, FixedOrRandom, Placement, Possibility, Size, Spacing,
};
use crate::error::SeedError;
use crate::library::PossibilityLibrary;
use crate::random::{RandomSource, SystemRandom};
use crate::spacing;

/// Hard ceiling on schema nesting. Well-formed content stays far below
/// this; hitting it means a possibility recurses without shrinking.
const MAX_DEPTH: usize = 64;

/// Construction-time configuration for a [`Seeder`].
pub struct SeederSettings {
    pub possibilities: PossibilityLibrary,
    /// Defaults to the system RNG when absent.
    pub random: Option<Box<dyn RandomSource>>,
}

/// Fills bounding boxes with placements according to a possibility
/// library. Holds the only mutable state, the random source, so
/// `generate` takes `&mut self`.
pub struct Seeder {
    library: PossibilityLibrary,
    random: Box<dyn RandomSource>,
}

impl Seeder {
    pub fn new(settings: SeederSettings) -> Self {
        Self {
            library: settings.possibilities,
            random: settings
                .random
                .unwrap_or_else(|| Box::new(SystemRandom::new())),
        }
    }

    /// Generate placements for the possibility registered under `title`,
    /// constrained to `bounds`. An empty list is a valid outcome; errors
    /// abort the whole call with nothing salvaged.
    pub fn generate(
        &mut self,
        title: &str,
        bounds: &BoundingBox,
    ) -> Result<Vec<Placement>, SeedError> {
        let mut placements = Vec::new();
        self.fill(title, bounds, 0, &mut placements)?;
        Ok(placements)
    }

    fn fill(
        &mut self,
        title: &str,
        bounds: &BoundingBox,
        depth: usize,
        out: &mut Vec<Placement>,
    ) -> Result<(), SeedError> {
        if depth >= MAX_DEPTH {
            return Err(SeedError::RecursionLimit {
                title: title.to_owned(),
                depth,
            });
        }

        let entry = self.library.get(title)?.clone();
        let possibility = chooser::fixed_or_random(self.random.as_mut(), &entry)?;
        // One spacing schema per fill; each gap still draws its own value.
        let spacing = chooser::fixed_or_random(self.random.as_mut(), &possibility.spacing)?;

        let direction = possibility.direction;
        let mut position = direction.start_edge(bounds);
        let before = out.len();

        'repeats: for _ in 0..possibility.repeat {
            let children = chooser::fixed_or_random(self.random.as_mut(), &possibility.children)?;
            for child in &children {
                match self.place_child(child, &possibility, &spacing, position, bounds, depth, out)?
                {
                    Some(next) => position = next,
                    None => {
                        trace!("possibility '{}': child does not fit, stopping", title);
                        break 'repeats;
                    }
                }
            }
        }

        debug!(
            "possibility '{}': placed {} results",
            title,
            out.len() - before
        );
        Ok(())
    }

    /// Place a single child at `position`, returning the next cursor
    /// position, or `None` when the child does not fit.
    fn place_child(
        &mut self,
        entry: &FixedOrRandom<ChildDef>,
        parent: &Possibility,
        spacing: &Spacing,
        position: f64,
        bounds: &BoundingBox,
        depth: usize,
        out: &mut Vec<Placement>,
    ) -> Result<Option<f64>, SeedError> {
        let child = chooser::fixed_or_random(self.random.as_mut(), entry)?;
        let size = chooser::fixed_or_random_or(self.random.as_mut(), child.size(), &parent.size)?;
        // The gap draw happens before the fit check; skipping it on a
        // misfit would shift every later draw and break replays.
        let gap = spacing::calculate(self.random.as_mut(), spacing)?;

        let direction = parent.direction;
        let extent = direction.advance(position, direction.extent_of(&size));
        if direction.crosses(extent, bounds) {
            return Ok(None);
        }
        // The trailing gap may overhang the box; only the child itself
        // must fit.
        let next = direction.advance(extent, gap);

        let align = child.align().unwrap_or(parent.align);
        let area = child_area(direction, align, position, extent, &size, bounds);

        match child {
            ChildDef::Possibility(nested) => {
                self.fill(&nested.title, &area, depth + 1, out)?;
            }
            ChildDef::Result(leaf) => {
                let title = chooser::fixed_or_random(self.random.as_mut(), &leaf.title)?;
                let properties = match &leaf.properties {
                    Some(p) => Some(chooser::fixed_or_random(self.random.as_mut(), p)?),
                    None => None,
                };
                out.push(Placement { area, title, properties });
            }
        }
        Ok(Some(next))
    }
}

/// Span `[position, extent]` along the direction axis; along the
/// perpendicular axis a span anchored per `align`, where alignments
/// parallel to the direction behave as `Stretch`.
fn child_area(
    direction: Direction,
    align: Align,
    position: f64,
    extent: f64,
    size: &Size,
    bounds: &BoundingBox,
) -> BoundingBox {
    match direction {
        Direction::Top | Direction::Bottom => {
            let (top, bottom) = if direction == Direction::Bottom {
                (position, extent)
            } else {
                (extent, position)
            };
            let (left, right) = match align {
                Align::Left => (bounds.left, bounds.left + size.width),
                Align::Right => (bounds.right - size.width, bounds.right),
                _ => (bounds.left, bounds.right),
            };
            BoundingBox { top, right, bottom, left }
        }
        Direction::Left | Direction::Right => {
            let (left, right) = if direction == Direction::Right {
                (position, extent)
            } else {
                (extent, position)
            };
            let (top, bottom) = match align {
                Align::Top => (bounds.top, bounds.top - size.height),
                Align::Bottom => (bounds.bottom + size.height, bounds.bottom),
                _ => (bounds.top, bounds.bottom),
            };
            BoundingBox { top, right, bottom, left }
        }
    }
}
