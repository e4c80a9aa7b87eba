//! Frame-driving state, independent of how frames get scheduled.
//!
//! The browser side (`wasm::render`) feeds `requestAnimationFrame` timestamps into
//! a [`FrameDriver`]; tests feed it whatever they like.

/// Something that can draw itself once per tick.
pub trait Scene {
    /// Draw one frame. `delta_seconds` is zero on the first frame.
    fn render_frame(&mut self, delta_seconds: f32);

    /// Used in log lines about the loop driving this scene.
    fn name(&self) -> &'static str {
        "render loop"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

/// Turns millisecond timestamps into per-frame deltas in seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationClock {
    last_ms: Option<f64>,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous tick. The first tick, and any timestamp that
    /// goes backwards, yields zero.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let delta = match self.last_ms {
            Some(last) if now_ms > last => ((now_ms - last) * 0.001) as f32,
            _ => 0.0,
        };
        self.last_ms = Some(now_ms);
        delta
    }
}

/// Rotation angle in radians, integrated from speed and frame delta.
///
/// Summed in `f64` so a page left open for hours keeps the per-frame step it
/// started with.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationAccumulator {
    angle: f64,
}

impl RotationAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn angle(&self) -> f32 {
        self.angle as f32
    }

    /// Add `delta_seconds * speed`. Negative deltas are treated as zero.
    pub fn advance(&mut self, delta_seconds: f32, speed: f32) {
        self.angle += f64::from(delta_seconds.max(0.0)) * f64::from(speed);
    }
}

/// Owns a scene plus the clock and lifecycle that drive it.
pub struct FrameDriver<S> {
    scene: S,
    clock: AnimationClock,
    state: LoopState,
    frames: u64,
}

impl<S: Scene> FrameDriver<S> {
    pub fn new(scene: S) -> Self {
        Self {
            scene,
            clock: AnimationClock::new(),
            state: LoopState::Idle,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    /// Idle -> Running. Returns false if the loop was already started or stopped.
    pub fn start(&mut self) -> bool {
        if self.state != LoopState::Idle {
            return false;
        }
        self.state = LoopState::Running;
        true
    }

    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }

    /// Render one frame if running. Returns whether another tick should be scheduled.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if self.state != LoopState::Running {
            return false;
        }
        let delta = self.clock.tick(now_ms);
        self.scene.render_frame(delta);
        self.frames += 1;
        true
    }
}
