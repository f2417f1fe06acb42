//! Chart rendering contract.
//!
//! The charting library is reached through [`ChartSurface`]. Live charts are
//! tracked in a [`ChartRegistry`] that the caller owns and passes in
//! explicitly, keyed by container id, so re-rendering into a container
//! replaces the previous chart rather than stacking a second one on top.

use crate::chart::ChartSpec;
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// Something that can draw charts into DOM containers.
pub trait ChartSurface {
    /// Library-side chart object returned by `draw`.
    type Instance;

    fn has_container(&self, container_id: &str) -> bool;

    fn draw(&mut self, spec: &ChartSpec) -> Result<Self::Instance>;

    fn destroy(&mut self, instance: Self::Instance) -> Result<()>;
}

/// A live chart bound to a container.
#[derive(Debug)]
pub struct ChartHandle<I> {
    container_id: String,
    instance: I,
}

impl<I> ChartHandle<I> {
    pub fn container_id(&self) -> &str {
        &self.container_id
    }

    pub fn instance(&self) -> &I {
        &self.instance
    }
}

/// Live charts by container id.
#[derive(Debug)]
pub struct ChartRegistry<I> {
    charts: BTreeMap<String, ChartHandle<I>>,
}

impl<I> Default for ChartRegistry<I> {
    fn default() -> Self {
        Self {
            charts: BTreeMap::new(),
        }
    }
}

impl<I> ChartRegistry<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    pub fn contains(&self, container_id: &str) -> bool {
        self.charts.contains_key(container_id)
    }

    pub fn get(&self, container_id: &str) -> Option<&ChartHandle<I>> {
        self.charts.get(container_id)
    }

    /// Take the handle out of the registry, if one is live.
    pub fn remove(&mut self, container_id: &str) -> Option<ChartHandle<I>> {
        self.charts.remove(container_id)
    }

    fn insert(&mut self, handle: ChartHandle<I>) {
        self.charts.insert(handle.container_id.clone(), handle);
    }

    pub fn drain(&mut self) -> Vec<ChartHandle<I>> {
        std::mem::take(&mut self.charts).into_values().collect()
    }
}

/// Draws [`ChartSpec`]s through a surface.
pub struct ChartRenderer<S: ChartSurface> {
    surface: S,
}

impl<S: ChartSurface> ChartRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Create or replace the chart in `spec.container_id`.
    pub fn render(&mut self, registry: &mut ChartRegistry<S::Instance>, spec: &ChartSpec) -> Result<()> {
        let container_id = spec.container_id.as_str();
        if !self.surface.has_container(container_id) {
            return Err(Error::RenderTargetMissing {
                container_id: container_id.to_string(),
            });
        }

        if let Some(previous) = registry.remove(container_id) {
            log::info!("Replacing chart in #{}", container_id);
            self.dispose(Some(previous));
        }

        let instance = self.surface.draw(spec)?;
        registry.insert(ChartHandle {
            container_id: container_id.to_string(),
            instance,
        });
        log::info!("Rendered {:?} chart '{}' into #{}", spec.chart_type, spec.title, container_id);
        Ok(())
    }

    /// Release a chart. `None` is a no-op; destroy failures are logged only.
    pub fn dispose(&mut self, handle: Option<ChartHandle<S::Instance>>) {
        let Some(handle) = handle else {
            return;
        };
        if let Err(e) = self.surface.destroy(handle.instance) {
            log::warn!("Failed to destroy chart in #{}: {}", handle.container_id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::SeriesPoint;
    use crate::testing::RecordingSurface;

    fn pie(container_id: &str) -> ChartSpec {
        ChartSpec::pie(container_id, "Share", vec![SeriesPoint::new("A", 1.0)]).unwrap()
    }

    #[test]
    fn test_render_records_handle() {
        let mut renderer = ChartRenderer::new(RecordingSurface::with_containers(&["pie"]));
        let mut registry = ChartRegistry::new();

        renderer.render(&mut registry, &pie("pie")).unwrap();

        assert!(registry.contains("pie"));
        assert_eq!(registry.get("pie").unwrap().container_id(), "pie");
        assert_eq!(renderer.surface().drawn, vec!["pie".to_string()]);
    }

    #[test]
    fn test_missing_container_is_an_error() {
        let mut renderer = ChartRenderer::new(RecordingSurface::with_containers(&[]));
        let mut registry = ChartRegistry::new();

        let err = renderer.render(&mut registry, &pie("nowhere")).unwrap_err();

        assert_eq!(
            err,
            Error::RenderTargetMissing {
                container_id: "nowhere".to_string()
            }
        );
        assert!(registry.is_empty());
        assert!(renderer.surface().drawn.is_empty());
    }

    #[test]
    fn test_rerender_replaces_previous_chart() {
        let mut renderer = ChartRenderer::new(RecordingSurface::with_containers(&["pie"]));
        let mut registry = ChartRegistry::new();

        renderer.render(&mut registry, &pie("pie")).unwrap();
        let first = *registry.get("pie").unwrap().instance();
        renderer.render(&mut registry, &pie("pie")).unwrap();

        assert_eq!(registry.len(), 1);
        assert_ne!(*registry.get("pie").unwrap().instance(), first);
        assert_eq!(renderer.surface().destroyed, vec![first]);
    }

    #[test]
    fn test_dispose_tolerates_none_and_failures() {
        let mut surface = RecordingSurface::with_containers(&["pie"]);
        surface.fail_destroy = true;
        let mut renderer = ChartRenderer::new(surface);
        let mut registry = ChartRegistry::new();

        renderer.dispose(None);
        renderer.render(&mut registry, &pie("pie")).unwrap();
        renderer.dispose(registry.remove("pie"));
        renderer.dispose(registry.remove("pie"));

        assert!(registry.is_empty());
    }
}
