//! Marker map rendering.
//!
//! The renderer keeps an explicit [`MapState`] and consults it on every
//! call: an unchanged point set is left alone, a changed one tears the map
//! down and draws it again.

use crate::error::{Error, Result};
use crate::geo::{GeoPoint, MapView};

/// Something that can draw a tile map with markers.
pub trait MapSurface {
    type Instance;

    fn has_container(&self, container_id: &str) -> bool;

    fn draw(&mut self, container_id: &str, view: &MapView, points: &[GeoPoint]) -> Result<Self::Instance>;

    fn remove(&mut self, instance: Self::Instance) -> Result<()>;
}

#[derive(Debug)]
pub enum MapState<I> {
    Uninitialized,
    Initialized { instance: I, points: Vec<GeoPoint> },
}

/// What a `render` call ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapRender {
    Initialized,
    Refreshed,
    Unchanged,
}

pub struct MapRenderer<S: MapSurface> {
    surface: S,
    container_id: String,
    view: MapView,
    state: MapState<S::Instance>,
}

impl<S: MapSurface> MapRenderer<S> {
    pub fn new(surface: S, container_id: &str, view: MapView) -> Self {
        Self {
            surface,
            container_id: container_id.to_string(),
            view,
            state: MapState::Uninitialized,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.state, MapState::Initialized { .. })
    }

    pub fn render(&mut self, points: &[GeoPoint]) -> Result<MapRender> {
        if !self.surface.has_container(&self.container_id) {
            return Err(Error::RenderTargetMissing {
                container_id: self.container_id.clone(),
            });
        }

        let outcome = match std::mem::replace(&mut self.state, MapState::Uninitialized) {
            MapState::Initialized { instance, points: current } if current.as_slice() == points => {
                self.state = MapState::Initialized {
                    instance,
                    points: current,
                };
                return Ok(MapRender::Unchanged);
            }
            MapState::Initialized { instance, .. } => {
                if let Err(e) = self.surface.remove(instance) {
                    log::warn!("Failed to remove map in #{}: {}", self.container_id, e);
                }
                MapRender::Refreshed
            }
            MapState::Uninitialized => MapRender::Initialized,
        };

        let instance = self.surface.draw(&self.container_id, &self.view, points)?;
        self.state = MapState::Initialized {
            instance,
            points: points.to_vec(),
        };
        log::info!(
            "Map #{} {:?} with {} markers",
            self.container_id,
            outcome,
            points.len()
        );
        Ok(outcome)
    }

    /// Remove the map, if drawn. Safe to call repeatedly.
    pub fn teardown(&mut self) {
        if let MapState::Initialized { instance, .. } =
            std::mem::replace(&mut self.state, MapState::Uninitialized)
        {
            if let Err(e) = self.surface.remove(instance) {
                log::warn!("Failed to remove map in #{}: {}", self.container_id, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;
    use crate::testing::RecordingSurface;

    fn renderer() -> MapRenderer<RecordingSurface> {
        MapRenderer::new(
            RecordingSurface::with_containers(&["company-map"]),
            "company-map",
            MapView::default(),
        )
    }

    #[test]
    fn test_first_render_initializes() {
        let mut map = renderer();
        assert!(!map.is_initialized());

        let outcome = map.render(&sample::company_locations()).unwrap();

        assert_eq!(outcome, MapRender::Initialized);
        assert!(map.is_initialized());
        assert_eq!(map.surface().drawn, vec!["company-map".to_string()]);
    }

    #[test]
    fn test_same_points_do_not_redraw() {
        let mut map = renderer();
        map.render(&sample::company_locations()).unwrap();

        let outcome = map.render(&sample::company_locations()).unwrap();

        assert_eq!(outcome, MapRender::Unchanged);
        assert_eq!(map.surface().drawn.len(), 1);
    }

    #[test]
    fn test_changed_points_redraw() {
        let mut map = renderer();
        map.render(&sample::company_locations()).unwrap();

        let mut points = sample::company_locations();
        points.push(GeoPoint::new("Company D", 43.0389, -87.9065));
        let outcome = map.render(&points).unwrap();

        assert_eq!(outcome, MapRender::Refreshed);
        assert_eq!(map.surface().drawn.len(), 2);
        assert_eq!(map.surface().destroyed.len(), 1);
    }

    #[test]
    fn test_missing_container() {
        let mut map = MapRenderer::new(
            RecordingSurface::with_containers(&[]),
            "company-map",
            MapView::default(),
        );
        assert!(matches!(
            map.render(&[]),
            Err(Error::RenderTargetMissing { .. })
        ));
        assert!(!map.is_initialized());
    }

    #[test]
    fn test_teardown_is_repeatable() {
        let mut map = renderer();
        map.render(&sample::company_locations()).unwrap();

        map.teardown();
        map.teardown();

        assert!(!map.is_initialized());
        assert_eq!(map.surface().destroyed.len(), 1);
    }
}
