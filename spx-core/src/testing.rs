//! In-memory surface used by the unit tests.

use crate::chart::ChartSpec;
use crate::error::{Error, Result};
use crate::geo::{GeoPoint, MapView};
use crate::map::MapSurface;
use crate::render::ChartSurface;
use std::collections::HashSet;

/// Records every draw and destroy instead of touching a DOM.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub containers: HashSet<String>,
    /// Container ids in draw order
    pub drawn: Vec<String>,
    /// Instance ids in destroy order
    pub destroyed: Vec<u32>,
    pub fail_destroy: bool,
    next_instance: u32,
}

impl RecordingSurface {
    pub fn with_containers(ids: &[&str]) -> Self {
        Self {
            containers: ids.iter().map(|id| id.to_string()).collect(),
            ..Self::default()
        }
    }

    fn next(&mut self, container_id: &str) -> u32 {
        self.drawn.push(container_id.to_string());
        self.next_instance += 1;
        self.next_instance
    }

    fn release(&mut self, instance: u32) -> Result<()> {
        self.destroyed.push(instance);
        if self.fail_destroy {
            Err(Error::Script {
                message: "destroy failed".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl ChartSurface for RecordingSurface {
    type Instance = u32;

    fn has_container(&self, container_id: &str) -> bool {
        self.containers.contains(container_id)
    }

    fn draw(&mut self, spec: &ChartSpec) -> Result<u32> {
        Ok(self.next(&spec.container_id))
    }

    fn destroy(&mut self, instance: u32) -> Result<()> {
        self.release(instance)
    }
}

impl MapSurface for RecordingSurface {
    type Instance = u32;

    fn has_container(&self, container_id: &str) -> bool {
        self.containers.contains(container_id)
    }

    fn draw(&mut self, container_id: &str, _view: &MapView, _points: &[GeoPoint]) -> Result<u32> {
        Ok(self.next(container_id))
    }

    fn remove(&mut self, instance: u32) -> Result<()> {
        self.release(instance)
    }
}
