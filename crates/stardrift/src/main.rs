use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
};
use stardrift_background::{Scene, SceneOptions, SceneWidget};
use stardrift_config::Config;
use stardrift_core::{CellSize, Clock, MonotonicClock, Viewport};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Loaded configuration.
    config: Config,
    /// Frame clock, started when the scene is created.
    clock: MonotonicClock,
    /// The animated background, created once the terminal size is known.
    scene: Option<Scene>,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(config: Config) -> Self {
        Self {
            running: false,
            config,
            clock: MonotonicClock::new(),
            scene: None,
        }
    }

    fn scene_options(&self) -> SceneOptions {
        SceneOptions {
            angle_step: self.config.angle_step,
            regenerate_comets_on_resize: self.config.regenerate_comets_on_resize,
            relaunch_comets: self.config.relaunch_comets,
        }
    }

    fn cell_size(&self) -> CellSize {
        self.config.cell_size()
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        let size = terminal.size()?;
        let viewport = Viewport::from_cells(size.width, size.height, self.cell_size());
        let scene = match self.config.seed {
            Some(seed) => Scene::new(viewport, self.scene_options(), seed),
            None => Scene::with_time_seed(viewport, self.scene_options()),
        };
        self.scene = Some(scene);
        self.clock = MonotonicClock::new();

        self.running = true;
        while self.running {
            let now = self.clock.now_ms();
            if let Some(scene) = self.scene.as_mut() {
                scene.tick(now);
            }
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        if let Some(scene) = &self.scene {
            frame.render_widget(SceneWidget::new(scene, self.cell_size()), area);
        }

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Background only
            Constraint::Length(1), // Help text
        ])
        .split(area);

        let help = Line::from(vec!["q".bold().white(), " quit".dark_gray()]).centered();
        frame.render_widget(help, chunks[1]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls no longer than one frame so the animation keeps moving.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.config.frame_interval())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Resize(cols, rows) => self.on_resize(cols, rows),
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            _ => {}
        }
    }

    /// Passes the new terminal size on to the scene.
    fn on_resize(&mut self, cols: u16, rows: u16) {
        let viewport = Viewport::from_cells(cols, rows, self.cell_size());
        if let Some(scene) = self.scene.as_mut()
            && scene.resize(viewport)
        {
            debug!("terminal resized to {cols}x{rows}");
        }
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
