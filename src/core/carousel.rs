//! Carousel engine shared by the services, hero and client-logo carousels.
//!
//! Each [`Carousel`] owns its index, its pause gates and at most one
//! auto-play timer. The timer is a spawned task held through a guard that
//! aborts it when the carousel restarts, stops or is dropped.

use crate::domain::ports::{SlideFrame, SlideView};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
pub const INTERSECTION_THRESHOLD: f64 = 0.5;

pub const MOBILE_MAX_WIDTH: u32 = 768;
pub const TABLET_MAX_WIDTH: u32 = 1024;

/// Items shown side by side for a viewport width.
pub fn items_per_view(viewport_width: u32) -> usize {
    if viewport_width <= MOBILE_MAX_WIDTH {
        1
    } else if viewport_width <= TABLET_MAX_WIDTH {
        2
    } else {
        3
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Leftward swipe (start right of end) goes forward. The delta must exceed the threshold.
pub fn classify_swipe(start_x: f64, end_x: f64, threshold: f64) -> Option<Direction> {
    let diff = start_x - end_x;
    if diff.abs() <= threshold {
        return None;
    }
    if diff > 0.0 {
        Some(Direction::Next)
    } else {
        Some(Direction::Prev)
    }
}

/// `top < height && bottom > 0`: some part of the container is on screen.
pub fn is_rect_in_view(rect_top: f64, rect_bottom: f64, window_height: f64) -> bool {
    rect_top < window_height && rect_bottom > 0.0
}

/// Logo marquee: the list followed by a copy of itself so the loop has no seam.
pub fn seamless_track<T: Clone>(items: &[T]) -> Vec<T> {
    let mut track = Vec::with_capacity(items.len() * 2);
    track.extend_from_slice(items);
    track.extend_from_slice(items);
    track
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselKey {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl CarouselKey {
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => CarouselKey::ArrowLeft,
            "ArrowRight" => CarouselKey::ArrowRight,
            _ => CarouselKey::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Items per view follow the viewport breakpoints.
    Responsive,
    Fixed(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    pub name: String,
    pub layout: Layout,
    pub autoplay_delay: Duration,
    pub swipe_threshold_px: f64,
}

impl CarouselConfig {
    pub fn services() -> Self {
        Self {
            name: "services".to_string(),
            layout: Layout::Responsive,
            autoplay_delay: Duration::from_millis(4000),
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
        }
    }

    pub fn hero() -> Self {
        Self {
            name: "hero".to_string(),
            layout: Layout::Fixed(1),
            autoplay_delay: Duration::from_millis(3000),
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
        }
    }

    pub fn clients() -> Self {
        Self {
            name: "clients".to_string(),
            layout: Layout::Fixed(1),
            autoplay_delay: Duration::from_millis(3000),
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
        }
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "services" => Some(Self::services()),
            "hero" => Some(Self::hero()),
            "clients" | "logos" => Some(Self::clients()),
            _ => None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.autoplay_delay = delay;
        self
    }

    pub fn with_swipe_threshold(mut self, threshold_px: f64) -> Self {
        self.swipe_threshold_px = threshold_px;
        self
    }

    fn per_view(&self, viewport_width: u32) -> usize {
        match self.layout {
            Layout::Responsive => items_per_view(viewport_width),
            Layout::Fixed(n) => n.max(1),
        }
    }
}

/// Pure index state; `current < total_slides()` whenever there are items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideState {
    current: usize,
    item_count: usize,
    per_view: usize,
}

impl SlideState {
    pub fn new(item_count: usize, per_view: usize) -> Self {
        Self {
            current: 0,
            item_count,
            per_view: per_view.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn per_view(&self) -> usize {
        self.per_view
    }

    pub fn total_slides(&self) -> usize {
        self.item_count.div_ceil(self.per_view)
    }

    pub fn step(&mut self, direction: Direction) -> bool {
        let total = self.total_slides();
        if total == 0 {
            return false;
        }
        self.current = match direction {
            Direction::Next => (self.current + 1) % total,
            Direction::Prev => (self.current + total - 1) % total,
        };
        true
    }

    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.total_slides() {
            return false;
        }
        self.current = index;
        true
    }

    /// Recomputes the slide count; keeps the index when still valid, else clamps to the last slide.
    pub fn set_per_view(&mut self, per_view: usize) -> bool {
        let per_view = per_view.max(1);
        if per_view == self.per_view {
            return false;
        }
        self.per_view = per_view;
        let total = self.total_slides();
        if total == 0 {
            self.current = 0;
        } else if self.current >= total {
            self.current = total - 1;
        }
        true
    }

    pub fn frame(&self) -> SlideFrame {
        SlideFrame {
            index: self.current,
            total: self.total_slides(),
            translate_percent: -(self.current as i64) * 100,
        }
    }
}

/// Owned auto-play task; dropping it cancels the task.
struct AutoPlayTimer {
    handle: JoinHandle<()>,
}

impl Drop for AutoPlayTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct PauseGates {
    hovered: bool,
    document_hidden: bool,
    out_of_viewport: bool,
}

impl PauseGates {
    fn any(&self) -> bool {
        self.hovered || self.document_hidden || self.out_of_viewport
    }
}

struct Inner {
    config: CarouselConfig,
    state: SlideState,
    view: Option<Arc<dyn SlideView>>,
    timer: Option<AutoPlayTimer>,
    gates: PauseGates,
    autoplay_wanted: bool,
    delay: Duration,
}

/// View updates collected under the state lock and applied after it is released,
/// so a view may call back into its carousel.
struct Paint {
    view: Arc<dyn SlideView>,
    indicators: Option<usize>,
    frame: Option<SlideFrame>,
}

impl Paint {
    fn apply(self) {
        if let Some(count) = self.indicators {
            self.view.rebuild_indicators(count);
        }
        if let Some(frame) = self.frame {
            self.view.apply(&frame);
        }
    }
}

impl Inner {
    fn render(&self) -> Option<Paint> {
        let view = self.view.clone()?;
        let total = self.state.total_slides();
        Some(Paint {
            view,
            indicators: None,
            frame: (total > 0).then(|| self.state.frame()),
        })
    }

    fn rebuild(&self) -> Option<Paint> {
        let mut paint = self.render()?;
        paint.indicators = Some(self.state.total_slides());
        Some(paint)
    }

    fn advance(&mut self, direction: Direction) -> Option<Paint> {
        if self.view.is_none() || !self.state.step(direction) {
            return None;
        }
        self.render()
    }
}

pub struct Carousel {
    inner: Arc<Mutex<Inner>>,
}

impl Carousel {
    /// A carousel without a view anchor or without items is inert: every call is a no-op.
    pub fn new(
        config: CarouselConfig,
        item_count: usize,
        view: Option<Arc<dyn SlideView>>,
        viewport_width: u32,
    ) -> Self {
        let per_view = config.per_view(viewport_width);
        let delay = config.autoplay_delay;
        let inner = Inner {
            config,
            state: SlideState::new(item_count, per_view),
            view,
            timer: None,
            gates: PauseGates::default(),
            autoplay_wanted: false,
            delay,
        };

        if inner.view.is_none() {
            tracing::debug!("Carousel '{}' has no view anchor, staying inert", inner.config.name);
        }
        let paint = inner.rebuild();

        let carousel = Self {
            inner: Arc::new(Mutex::new(inner)),
        };
        if let Some(paint) = paint {
            paint.apply();
        }
        carousel
    }

    fn paint_with(&self, f: impl FnOnce(&mut Inner) -> Option<Paint>) {
        if let Some(paint) = self.with_inner(f).flatten() {
            paint.apply();
        }
    }

    fn with_inner<R>(&self, f: impl FnOnce(&mut Inner) -> R) -> Option<R> {
        match self.inner.lock() {
            Ok(mut guard) => Some(f(&mut guard)),
            Err(_) => {
                tracing::warn!("Carousel state lock poisoned");
                None
            }
        }
    }

    pub fn name(&self) -> String {
        self.with_inner(|inner| inner.config.name.clone())
            .unwrap_or_default()
    }

    pub fn current_index(&self) -> usize {
        self.with_inner(|inner| inner.state.current()).unwrap_or(0)
    }

    pub fn total_slides(&self) -> usize {
        self.with_inner(|inner| inner.state.total_slides())
            .unwrap_or(0)
    }

    pub fn items_per_view(&self) -> usize {
        self.with_inner(|inner| inner.state.per_view()).unwrap_or(1)
    }

    pub fn is_paused(&self) -> bool {
        self.with_inner(|inner| inner.gates.any()).unwrap_or(false)
    }

    pub fn is_autoplaying(&self) -> bool {
        self.with_inner(|inner| inner.timer.is_some())
            .unwrap_or(false)
    }

    pub fn next(&self) {
        self.navigate(|state| state.step(Direction::Next));
    }

    pub fn prev(&self) {
        self.navigate(|state| state.step(Direction::Prev));
    }

    pub fn go_to(&self, index: usize) {
        self.navigate(|state| state.go_to(index));
    }

    pub fn render(&self) {
        self.paint_with(|inner| inner.render());
    }

    /// Manual navigation: move, render, and restart a running timer from now.
    fn navigate(&self, mv: impl FnOnce(&mut SlideState) -> bool) {
        let weak = Arc::downgrade(&self.inner);
        self.paint_with(|inner| {
            if inner.view.is_none() || !mv(&mut inner.state) {
                return None;
            }
            if inner.timer.is_some() {
                inner.timer = None;
                inner.timer = spawn_timer(weak, inner.delay, &inner.config.name);
            }
            inner.render()
        });
    }

    pub fn start_autoplay(&self) {
        let weak = Arc::downgrade(&self.inner);
        self.with_inner(|inner| {
            inner.autoplay_wanted = true;
            // 先釋放舊的計時器，確保同時最多一個
            inner.timer = None;
            if inner.view.is_none() || inner.state.total_slides() == 0 || inner.gates.any() {
                return;
            }
            inner.timer = spawn_timer(weak, inner.delay, &inner.config.name);
        });
    }

    pub fn start_autoplay_with(&self, delay: Duration) {
        self.with_inner(|inner| inner.delay = delay);
        self.start_autoplay();
    }

    pub fn stop_autoplay(&self) {
        self.with_inner(|inner| {
            inner.autoplay_wanted = false;
            inner.timer = None;
        });
    }

    /// Re-evaluates the gates: paused drops the timer, all clear restarts it.
    fn sync_gates(&self, update: impl FnOnce(&mut PauseGates)) {
        let weak = Arc::downgrade(&self.inner);
        self.with_inner(|inner| {
            update(&mut inner.gates);
            if inner.gates.any() {
                if inner.timer.take().is_some() {
                    tracing::debug!("Carousel '{}' auto-play paused", inner.config.name);
                }
            } else if inner.autoplay_wanted
                && inner.timer.is_none()
                && inner.view.is_some()
                && inner.state.total_slides() > 0
            {
                inner.timer = spawn_timer(weak, inner.delay, &inner.config.name);
            }
        });
    }

    pub fn set_hovered(&self, hovered: bool) {
        self.sync_gates(|gates| gates.hovered = hovered);
    }

    pub fn set_document_hidden(&self, hidden: bool) {
        self.sync_gates(|gates| gates.document_hidden = hidden);
    }

    pub fn set_in_viewport(&self, visible: bool) {
        self.sync_gates(|gates| gates.out_of_viewport = !visible);
    }

    pub fn on_intersection(&self, ratio: f64) {
        self.set_in_viewport(ratio >= INTERSECTION_THRESHOLD);
    }

    pub fn on_scroll(&self, rect_top: f64, rect_bottom: f64, window_height: f64) {
        self.set_in_viewport(is_rect_in_view(rect_top, rect_bottom, window_height));
    }

    /// Responsive carousels recompute items per view and rebuild indicators on resize.
    pub fn resize(&self, viewport_width: u32) {
        self.paint_with(|inner| {
            let per_view = inner.config.per_view(viewport_width);
            if !inner.state.set_per_view(per_view) {
                return None;
            }
            tracing::debug!(
                "Carousel '{}' now shows {} per view ({} slides)",
                inner.config.name,
                per_view,
                inner.state.total_slides()
            );
            inner.rebuild()
        });
    }

    pub fn swipe(&self, start_x: f64, end_x: f64) -> Option<Direction> {
        let threshold = self
            .with_inner(|inner| inner.config.swipe_threshold_px)
            .unwrap_or(SWIPE_THRESHOLD_PX);
        let direction = classify_swipe(start_x, end_x, threshold)?;
        match direction {
            Direction::Next => self.next(),
            Direction::Prev => self.prev(),
        }
        Some(direction)
    }

    /// Arrow keys navigate only while the carousel is on screen.
    pub fn key(&self, key: CarouselKey) -> bool {
        let in_view = self
            .with_inner(|inner| !inner.gates.out_of_viewport)
            .unwrap_or(false);
        if !in_view {
            return false;
        }
        match key {
            CarouselKey::ArrowLeft => self.prev(),
            CarouselKey::ArrowRight => self.next(),
            CarouselKey::Other => return false,
        }
        true
    }
}

fn spawn_timer(weak: Weak<Mutex<Inner>>, delay: Duration, name: &str) -> Option<AutoPlayTimer> {
    let Ok(runtime) = tokio::runtime::Handle::try_current() else {
        tracing::warn!("Carousel '{}' auto-play needs a tokio runtime, skipping", name);
        return None;
    };

    let delay = delay.max(Duration::from_millis(1));
    // 在 spawn 前就決定第一次觸發時間
    let mut ticker = tokio::time::interval_at(Instant::now() + delay, delay);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let handle = runtime.spawn(async move {
        loop {
            ticker.tick().await;
            let Some(inner) = weak.upgrade() else { break };
            let paint = match inner.lock() {
                Ok(mut guard) => guard.advance(Direction::Next),
                Err(_) => break,
            };
            drop(inner);
            if let Some(paint) = paint {
                paint.apply();
            }
        }
    });

    Some(AutoPlayTimer { handle })
}
