use crate::domain::{
    chart::{
        ChartConfig, ChartScene, ContainerSizes, CurveBuilder, CurveStyle, DrawingSurface,
        LabelScheduler, Layer, PlotPoint, TimeWindow, Track, with_label_anchors,
    },
    errors::ChartResult,
    logging::{LogComponent, TimeProvider},
    series::{FullSeries, Preset, RandomSource, Sample, SeriesGenerator, Timestamp},
};
use crate::view_state::{Grip, WindowLimits, WindowState};
use std::collections::HashMap;
use std::sync::Arc;

/// One chart card: owns its series, preset and selection window, and redraws its
/// surface after every change.
pub struct RangeController<S: DrawingSurface> {
    index: usize,
    reference_now: Timestamp,
    preset: Preset,
    series: FullSeries,
    overrides: HashMap<Preset, FullSeries>,
    window: WindowState,
    sizes: ContainerSizes,
    generator: SeriesGenerator,
    scheduler: LabelScheduler,
    builder: CurveBuilder,
    config: ChartConfig,
    surface: S,
}

impl<S: DrawingSurface> RangeController<S> {
    /// A chart showing the most recent default-width slice of `preset`.
    ///
    /// The series is generated at once; nothing is drawn until the container has
    /// been measured through [`RangeController::on_container_resized`].
    pub fn new(
        index: usize,
        surface: S,
        preset: Preset,
        reference_now: Timestamp,
        local_time: Arc<dyn TimeProvider>,
        config: &ChartConfig,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let limits = WindowLimits {
            min_width_pct: config.min_width_pct,
            max_width_pct: config.max_width_pct,
        };
        let generator = SeriesGenerator::new(config.point_count);
        let series = generator.generate(preset.total_minutes(), reference_now, rng);

        Self {
            index,
            reference_now,
            preset,
            series,
            overrides: HashMap::new(),
            window: WindowState::anchored_latest(preset.default_window_pct(), limits),
            sizes: ContainerSizes::default(),
            generator,
            scheduler: LabelScheduler::new(config.label_iteration_limit, local_time),
            builder: CurveBuilder::new(config.smoothing, config.detail_value_scale),
            config: config.clone(),
            surface,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    pub fn series(&self) -> &FullSeries {
        &self.series
    }

    pub fn window(&self) -> &WindowState {
        &self.window
    }

    pub fn sizes(&self) -> ContainerSizes {
        self.sizes
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn track(&self) -> Track {
        Track::new(self.reference_now, self.preset.total_minutes())
    }

    pub fn visible_window(&self) -> TimeWindow {
        self.track().window_for(self.window.left_pct(), self.window.width_pct())
    }

    /// Switch preset: full-range window, new series, everything redrawn.
    pub fn set_range(&mut self, preset: Preset, rng: &mut dyn RandomSource) {
        self.preset = preset;
        self.window = WindowState::full_range(self.window.limits());
        self.series = match self.overrides.get(&preset) {
            Some(series) => series.clone(),
            None => self.generator.generate(preset.total_minutes(), self.reference_now, rng),
        };

        crate::log_debug!(
            LogComponent::Application("RangeController"),
            "chart {} -> {} ({} samples)",
            self.index,
            preset,
            self.series.len()
        );

        self.render_overview();
        self.render_detail();
    }

    /// Replace the dataset used for `preset`. Only an active preset is reloaded.
    pub fn update_data(
        &mut self,
        preset: Preset,
        samples: Vec<Sample>,
        rng: &mut dyn RandomSource,
    ) -> ChartResult<()> {
        let series = FullSeries::from_samples(samples)?;
        self.overrides.insert(preset, series);
        if preset == self.preset {
            self.set_range(preset, rng);
        }
        Ok(())
    }

    pub fn pointer_down(&mut self, grip: Grip, pointer_x: f64) -> bool {
        self.window.begin(grip, pointer_x)
    }

    /// Returns whether the window moved (and the detail view was redrawn).
    pub fn pointer_move(&mut self, pointer_x: f64) -> bool {
        let changed = self.window.pointer_move(pointer_x, self.sizes.track_width);
        if changed {
            self.render_detail();
        }
        changed
    }

    pub fn pointer_up(&mut self) {
        self.window.release();
    }

    /// New container measurements: both plots are redrawn from the existing series.
    pub fn on_container_resized(&mut self, sizes: ContainerSizes) {
        self.sizes = sizes;
        self.render_overview();
        self.render_detail();
    }

    /// Redraw both plots without changing any state.
    pub fn refresh(&mut self) {
        self.render_overview();
        self.render_detail();
    }

    fn scene(
        &self,
        layer: Layer,
        points: &[PlotPoint],
        time_range: Option<TimeWindow>,
    ) -> Option<ChartScene> {
        let size = match layer {
            Layer::Detail => self.sizes.detail,
            Layer::Overview => self.sizes.overview,
        };
        let geometry = self.builder.build(points, size, layer, time_range)?;
        Some(ChartScene {
            geometry,
            style: CurveStyle::for_layer(
                layer,
                self.config.marker_radius,
                self.config.marker_hover_radius,
            ),
            gradient_id: ChartScene::gradient_id_for(self.index, layer),
        })
    }

    fn render_overview(&mut self) {
        let points: Vec<PlotPoint> = self.series.samples().iter().map(PlotPoint::from).collect();
        let scene = self.scene(Layer::Overview, &points, None);
        self.surface.draw(Layer::Overview, scene.as_ref());
    }

    fn render_detail(&mut self) {
        let track = self.track();
        let visible = self.visible_window();

        let labels = self.scheduler.schedule(track, visible, self.preset.label_step_minutes());
        let label_times: Vec<Timestamp> = labels.iter().map(|l| l.time).collect();

        let padded = visible.padded(self.config.render_buffer_ratio);
        let subset = self.series.between(padded.start, padded.end);
        let points = with_label_anchors(&self.series, subset, &label_times);
        let scene = self.scene(Layer::Detail, &points, Some(visible));

        self.surface.place_window(self.window.left_pct(), self.window.width_pct());
        self.surface.draw_axis(&LabelScheduler::position(labels, visible));
        self.surface.draw(Layer::Detail, scene.as_ref());
    }
}
