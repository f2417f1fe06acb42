//! Dashboard assembly: which charts go where, and their lifetime.
//!
//! `activate` renders every enabled panel, in order, into its fixed
//! container. `deactivate` disposes whatever activation produced. The
//! assembly owns the chart registry for as long as the dashboard is mounted.

use crate::chart::ChartSpec;
use crate::error::{Error, ValidationError};
use crate::render::{ChartRegistry, ChartRenderer, ChartSurface};
use crate::sample;

pub const SPONSORSHIP_CHART_ID: &str = "bar-chart-sponsorship";
pub const INDUSTRY_CHART_ID: &str = "pie-chart-industry";
pub const FUNDING_CHART_ID: &str = "bar-chart-funding";
pub const MILWAUKEE_CHART_ID: &str = "pie-chart-milwaukee";
pub const UNTAPPED_CHART_ID: &str = "bar-chart-untapped";

/// A dashboard slot: container id plus the chart that fills it.
pub struct Panel {
    pub container_id: &'static str,
    pub enabled: bool,
    build: fn(&str) -> Result<ChartSpec, ValidationError>,
}

impl Panel {
    pub fn spec(&self) -> Result<ChartSpec, ValidationError> {
        (self.build)(self.container_id)
    }
}

fn sponsorship_chart(id: &str) -> Result<ChartSpec, ValidationError> {
    ChartSpec::bar(
        id,
        "Sponsorship Likelihood Score",
        sample::companies(),
        &sample::SIMILARITIES,
    )
}

fn industry_chart(id: &str) -> Result<ChartSpec, ValidationError> {
    ChartSpec::pie(id, "Industry Alignment", sample::series(&sample::INDUSTRY_ALIGNMENT))
}

fn funding_chart(id: &str) -> Result<ChartSpec, ValidationError> {
    ChartSpec::bar_from_points(id, "Funding Capacity", &sample::series(&sample::FUNDING_CAPACITY))
}

fn milwaukee_chart(id: &str) -> Result<ChartSpec, ValidationError> {
    ChartSpec::pie(
        id,
        "Milwaukee vs. National Sponsorship",
        sample::series(&sample::MILWAUKEE_VS_NATIONAL),
    )
}

fn untapped_chart(id: &str) -> Result<ChartSpec, ValidationError> {
    ChartSpec::bar_from_points(
        id,
        "Potential Untapped Sponsors",
        &sample::series(&sample::UNTAPPED_SPONSORS),
    )
}

/// Dashboard layout in render order. The Milwaukee split is kept but not shown.
pub static PANELS: [Panel; 5] = [
    Panel {
        container_id: SPONSORSHIP_CHART_ID,
        enabled: true,
        build: sponsorship_chart,
    },
    Panel {
        container_id: INDUSTRY_CHART_ID,
        enabled: true,
        build: industry_chart,
    },
    Panel {
        container_id: FUNDING_CHART_ID,
        enabled: true,
        build: funding_chart,
    },
    Panel {
        container_id: MILWAUKEE_CHART_ID,
        enabled: false,
        build: milwaukee_chart,
    },
    Panel {
        container_id: UNTAPPED_CHART_ID,
        enabled: true,
        build: untapped_chart,
    },
];

pub fn enabled_panels() -> impl Iterator<Item = &'static Panel> {
    PANELS.iter().filter(|p| p.enabled)
}

/// Container ids the dashboard view must provide, in layout order.
pub fn container_ids() -> Vec<&'static str> {
    enabled_panels().map(|p| p.container_id).collect()
}

/// Result of one activation.
#[derive(Debug, Default)]
pub struct Activation {
    pub rendered: Vec<String>,
    pub failures: Vec<(String, Error)>,
}

impl Activation {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

pub struct DashboardAssembly<S: ChartSurface> {
    renderer: ChartRenderer<S>,
    registry: ChartRegistry<S::Instance>,
    attempted: Vec<String>,
}

impl<S: ChartSurface> DashboardAssembly<S> {
    pub fn new(surface: S) -> Self {
        Self {
            renderer: ChartRenderer::new(surface),
            registry: ChartRegistry::new(),
            attempted: Vec::new(),
        }
    }

    pub fn registry(&self) -> &ChartRegistry<S::Instance> {
        &self.registry
    }

    pub fn surface(&self) -> &S {
        self.renderer.surface()
    }

    /// Render every enabled panel. A failing panel does not stop the rest.
    pub fn activate(&mut self) -> Activation {
        let mut activation = Activation::default();
        for panel in enabled_panels() {
            let id = panel.container_id.to_string();
            if !self.attempted.contains(&id) {
                self.attempted.push(id.clone());
            }

            let result = panel
                .spec()
                .map_err(Error::from)
                .and_then(|spec| self.renderer.render(&mut self.registry, &spec));
            match result {
                Ok(()) => activation.rendered.push(id),
                Err(e) => {
                    log::error!("Failed to render #{}: {}", id, e);
                    activation.failures.push((id, e));
                }
            }
        }
        log::info!(
            "Dashboard activated: {} rendered, {} failed",
            activation.rendered.len(),
            activation.failures.len()
        );
        activation
    }

    /// Dispose every chart activation attempted, including ones that never
    /// produced a handle.
    pub fn deactivate(&mut self) {
        for id in std::mem::take(&mut self.attempted) {
            self.renderer.dispose(self.registry.remove(&id));
        }
        for stray in self.registry.drain() {
            self.renderer.dispose(Some(stray));
        }
        log::info!("Dashboard deactivated");
    }
}
