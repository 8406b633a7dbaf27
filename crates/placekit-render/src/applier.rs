//! Walks arrangement trees and performs the widget side effects.

use indexmap::IndexMap;
use smallvec::{smallvec, SmallVec};

use placekit_layout::{LayoutArrangement, PlatformWidget};

/// A realized widget and the reuse tag it was claimed under.
struct RealizedWidget {
    reuse_id: Option<String>,
    widget: Box<dyn PlatformWidget>,
}

/// Applies arrangement trees to real widgets, one pass per call.
///
/// The applier owns the widgets it realizes. Each [`apply`](Self::apply) moves
/// the previous pass's widgets into a recycler keyed by reuse id, walks the new
/// arrangement depth-first (parents before children), and per node either
/// claims a compatible recycled widget or makes a fresh one, configures it, and
/// positions it at the arrangement's frame. Widgets the new pass did not claim
/// are dropped.
///
/// Widgets are not `Send`, so neither is the applier: every side effect stays
/// on the thread that owns the platform toolkit. Measurement and arrangement
/// can happen anywhere; only this type is thread-confined.
#[derive(Default)]
pub struct WidgetApplier {
    active: Vec<RealizedWidget>,
}

impl WidgetApplier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Realizes `arrangement`, recycling widgets from the previous pass.
    pub fn apply(&mut self, arrangement: &LayoutArrangement) {
        let mut recycler = WidgetRecycler::new(std::mem::take(&mut self.active));
        let mut active = Vec::new();

        let mut pending: SmallVec<[&LayoutArrangement; 8]> = smallvec![arrangement];
        while let Some(node) = pending.pop() {
            active.push(Self::realize(node, &mut recycler));
            for child in node.sublayouts.iter().rev() {
                pending.push(child);
            }
        }

        recycler.discard_remaining();
        self.active = active;
    }

    fn realize(node: &LayoutArrangement, recycler: &mut WidgetRecycler) -> RealizedWidget {
        let layout = &node.layout;
        let reuse_id = layout.view_reuse_id().map(str::to_owned);

        let recycled = reuse_id
            .as_deref()
            .and_then(|id| recycler.claim(id, |widget| layout.can_reuse_widget(widget)));
        let mut widget = match recycled {
            Some(widget) => {
                log::trace!("reusing widget for {:?}", reuse_id.as_deref());
                widget
            }
            None => {
                log::trace!("creating widget for {:?}", reuse_id.as_deref());
                layout.make_widget()
            }
        };

        layout.configure_widget(widget.as_mut());
        widget.set_frame(node.frame);

        RealizedWidget { reuse_id, widget }
    }

    /// The widgets realized by the last pass, parents before children.
    pub fn widgets(&self) -> impl Iterator<Item = &dyn PlatformWidget> + '_ {
        self.active.iter().map(|realized| realized.widget.as_ref())
    }

    pub fn widgets_mut(&mut self) -> impl Iterator<Item = &mut dyn PlatformWidget> + '_ {
        self.active
            .iter_mut()
            .map(|realized| realized.widget.as_mut())
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Drops every realized widget.
    pub fn clear(&mut self) {
        self.active.clear();
    }
}

/// The previous pass's widgets, keyed by reuse id, awaiting a claim.
struct WidgetRecycler {
    by_id: IndexMap<String, Vec<Box<dyn PlatformWidget>>>,
    untagged: usize,
}

impl WidgetRecycler {
    fn new(previous: Vec<RealizedWidget>) -> Self {
        let mut by_id: IndexMap<String, Vec<Box<dyn PlatformWidget>>> = IndexMap::new();
        let mut untagged = 0;
        for realized in previous {
            match realized.reuse_id {
                Some(id) => by_id.entry(id).or_default().push(realized.widget),
                // Widgets without a reuse id are never recycled.
                None => untagged += 1,
            }
        }
        Self { by_id, untagged }
    }

    /// Takes the first widget stored under `id` that the node accepts.
    fn claim(
        &mut self,
        id: &str,
        accepts: impl Fn(&dyn PlatformWidget) -> bool,
    ) -> Option<Box<dyn PlatformWidget>> {
        let pool = self.by_id.get_mut(id)?;
        let index = pool.iter().position(|widget| accepts(widget.as_ref()))?;
        Some(pool.remove(index))
    }

    fn discard_remaining(self) {
        let unclaimed: usize = self.by_id.values().map(Vec::len).sum();
        if unclaimed > 0 || self.untagged > 0 {
            log::debug!(
                "dropping {} unclaimed and {} untagged widgets from the previous pass",
                unclaimed,
                self.untagged
            );
        }
    }
}
