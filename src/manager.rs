use crate::games::Game;
use crate::{PadEvent, PadKey, PadPosition, PadRegistry};
use std::collections::HashSet;

/// Owns the games and the pad registry, and decides which game gets to see a press.
///
/// At most one game is active. Switching always stops the active game, clears the surface and
/// only then starts the next one. All operations on an empty manager are no-ops.
///
/// ```rust
/// # use padgames::{GameManager, MockSurface, PadEvent, PadPosition, PadRegistry};
/// # use padgames::games::{ColorChanger, PixelPaint};
/// let mut manager = GameManager::new(PadRegistry::new(MockSurface::new()));
/// manager.add_game(ColorChanger::new());
/// manager.add_game(PixelPaint::new());
/// manager.start_current();
///
/// manager.handle_event(PadEvent::Pressed { position: PadPosition::new(2, 2), velocity: 127 });
/// manager.handle_event(PadEvent::Pressed { position: PadPosition::new(1, 9), velocity: 127 });
/// assert_eq!(manager.current_index(), 1);
/// ```
pub struct GameManager {
    registry: PadRegistry,
    games: Vec<Box<dyn Game + Send>>,
    current: usize,
    active: bool,
    switch_pad: PadPosition,
    held: HashSet<PadKey>,
}

impl GameManager {
    pub fn new(registry: PadRegistry) -> Self {
        Self::with_switch_pad(registry, crate::Settings::default().switch_pad)
    }

    /// Like [`GameManager::new`], but with a different control pad for switching games
    pub fn with_switch_pad(registry: PadRegistry, switch_pad: PadPosition) -> Self {
        Self {
            registry,
            games: Vec::new(),
            current: 0,
            active: false,
            switch_pad,
            held: HashSet::new(),
        }
    }

    pub fn add_game(&mut self, game: impl Game + Send + 'static) {
        self.games.push(Box::new(game));
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    /// The name of the active game, if any game was started
    pub fn active_game(&self) -> Option<&str> {
        if self.active {
            self.games.get(self.current).map(|game| game.name())
        } else {
            None
        }
    }

    pub fn registry(&self) -> &PadRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut PadRegistry {
        &mut self.registry
    }

    /// Start the game at the current index, unless a game is already running
    pub fn start_current(&mut self) {
        if self.active {
            return;
        }
        if let Some(game) = self.games.get_mut(self.current) {
            log::info!("Starting {}", game.name());
            game.start(&mut self.registry);
            self.active = true;
        }
    }

    /// Stop the active game, clear the surface and start the next game in line
    pub fn switch_to_next(&mut self) {
        if self.games.is_empty() {
            return;
        }

        if self.active {
            if let Some(game) = self.games.get_mut(self.current) {
                game.stop(&mut self.registry);
            }
            self.active = false;
        }

        self.current = (self.current + 1) % self.games.len();
        self.registry.clear_all();
        self.start_current();
    }

    /// Hand a grid press to the active game. Dropped if no game is running.
    pub fn dispatch(&mut self, position: PadPosition) {
        if !self.active {
            return;
        }
        if let Some(game) = self.games.get_mut(self.current) {
            game.handle_pad_press(position, &mut self.registry);
        }
    }

    /// Route an inbound event: the switch pad changes games, other control pads and releases
    /// are dropped, grid presses go to the active game.
    ///
    /// A pad counts as held from its press until its release. Another press on a held pad is
    /// dropped.
    pub fn handle_event(&mut self, event: PadEvent) {
        let position = event.position();
        if !event.is_press() {
            self.held.remove(&position.key());
            return;
        }
        if !self.held.insert(position.key()) {
            log::trace!("Pad {:?} is still held, ignoring press", position);
            return;
        }

        if position == self.switch_pad {
            self.switch_to_next();
        } else if position.is_control() {
            log::debug!("Ignoring press on control pad {:?}", position);
        } else {
            self.dispatch(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MockSurface, SurfaceCommand};
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};

    /// Records which lifecycle calls reach it, tagged with its id
    struct Recorder {
        id: usize,
        log: Arc<Mutex<Vec<(usize, &'static str)>>>,
    }

    impl Game for Recorder {
        fn name(&self) -> &str {
            "Recorder"
        }

        fn start(&mut self, _registry: &mut PadRegistry) {
            self.log.lock().unwrap().push((self.id, "start"));
        }

        fn stop(&mut self, _registry: &mut PadRegistry) {
            self.log.lock().unwrap().push((self.id, "stop"));
        }

        fn handle_pad_press(&mut self, _position: PadPosition, _registry: &mut PadRegistry) {
            self.log.lock().unwrap().push((self.id, "press"));
        }
    }

    fn manager_with(count: usize) -> (GameManager, Arc<Mutex<Vec<(usize, &'static str)>>>, MockSurface) {
        let surface = MockSurface::new();
        let mut manager = GameManager::new(PadRegistry::new(surface.clone()));
        let log = Arc::new(Mutex::new(vec![]));
        for id in 0..count {
            manager.add_game(Recorder {
                id,
                log: log.clone(),
            });
        }
        (manager, log, surface)
    }

    fn press(row: u8, col: u8) -> PadEvent {
        PadEvent::Pressed {
            position: PadPosition::new(row, col),
            velocity: 127,
        }
    }

    fn release(row: u8, col: u8) -> PadEvent {
        PadEvent::Released {
            position: PadPosition::new(row, col),
        }
    }

    #[test]
    fn empty_manager_does_nothing() {
        let (mut manager, _log, surface) = manager_with(0);

        manager.start_current();
        manager.switch_to_next();
        manager.dispatch(PadPosition::new(1, 1));

        assert_eq!(manager.current_index(), 0);
        assert_eq!(manager.active_game(), None);
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn start_is_not_repeated_while_active() {
        let (mut manager, log, _surface) = manager_with(2);

        manager.start_current();
        manager.start_current();

        assert_eq!(*log.lock().unwrap(), vec![(0, "start")]);
    }

    #[test]
    fn three_switches_come_back_around() {
        let (mut manager, log, _surface) = manager_with(3);
        manager.start_current();

        for _ in 0..3 {
            manager.switch_to_next();
        }

        assert_eq!(manager.current_index(), 0);
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                (0, "start"),
                (0, "stop"),
                (1, "start"),
                (1, "stop"),
                (2, "start"),
                (2, "stop"),
                (0, "start"),
            ]
        );
    }

    #[test]
    fn switching_before_start_only_starts() {
        let (mut manager, log, _surface) = manager_with(2);

        manager.switch_to_next();

        assert_eq!(manager.current_index(), 1);
        assert_eq!(*log.lock().unwrap(), vec![(1, "start")]);
    }

    #[test]
    fn switching_clears_the_surface() {
        let (mut manager, _log, surface) = manager_with(2);
        manager.start_current();

        manager.switch_to_next();

        assert_eq!(surface.commands(), vec![SurfaceCommand::ClearAll]);
    }

    #[test]
    fn presses_are_dropped_until_a_game_runs() {
        let (mut manager, log, _surface) = manager_with(1);

        manager.handle_event(press(4, 4));
        manager.handle_event(release(4, 4));
        manager.start_current();
        manager.handle_event(press(4, 4));

        assert_eq!(*log.lock().unwrap(), vec![(0, "start"), (0, "press")]);
    }

    #[test]
    fn held_pad_is_not_pressed_again_until_released() {
        let (mut manager, log, _surface) = manager_with(1);
        manager.start_current();

        manager.handle_event(press(4, 4));
        manager.handle_event(PadEvent::Pressed {
            position: PadPosition::new(4, 4),
            velocity: 90,
        });
        manager.handle_event(release(4, 4));
        manager.handle_event(press(4, 4));

        assert_eq!(*log.lock().unwrap(), vec![(0, "start"), (0, "press"), (0, "press")]);
    }

    #[test]
    fn silent_press_releases_a_held_pad() {
        let (mut manager, log, _surface) = manager_with(1);
        manager.start_current();

        manager.handle_event(press(2, 7));
        manager.handle_event(PadEvent::Pressed {
            position: PadPosition::new(2, 7),
            velocity: 0,
        });
        manager.handle_event(press(2, 7));
        // Other pads are tracked separately
        manager.handle_event(press(2, 6));

        assert_eq!(
            *log.lock().unwrap(),
            vec![(0, "start"), (0, "press"), (0, "press"), (0, "press")]
        );
    }

    #[test]
    fn held_switch_pad_switches_once() {
        let (mut manager, _log, _surface) = manager_with(3);
        manager.start_current();

        manager.handle_event(press(1, 9));
        manager.handle_event(press(1, 9));

        assert_eq!(manager.current_index(), 1);
    }

    #[test]
    fn switch_pad_switches_and_other_control_pads_are_dropped() {
        let (mut manager, log, _surface) = manager_with(2);
        manager.start_current();

        manager.handle_event(press(2, 9));
        manager.handle_event(press(9, 3));
        manager.handle_event(press(1, 9));

        assert_eq!(manager.current_index(), 1);
        assert_eq!(*log.lock().unwrap(), vec![(0, "start"), (0, "stop"), (1, "start")]);
    }

    #[test]
    fn releases_and_silent_presses_are_ignored() {
        let (mut manager, log, _surface) = manager_with(1);
        manager.start_current();

        manager.handle_event(PadEvent::Released {
            position: PadPosition::new(3, 3),
        });
        manager.handle_event(PadEvent::Pressed {
            position: PadPosition::new(3, 3),
            velocity: 0,
        });
        manager.handle_event(PadEvent::Pressed {
            position: PadPosition::new(1, 9),
            velocity: 0,
        });

        assert_eq!(*log.lock().unwrap(), vec![(0, "start")]);
    }

    #[test]
    fn custom_switch_pad() {
        let surface = MockSurface::new();
        let mut manager =
            GameManager::with_switch_pad(PadRegistry::new(surface), PadPosition::new(9, 8));
        let log = Arc::new(Mutex::new(vec![]));
        for id in 0..2 {
            manager.add_game(Recorder { id, log: log.clone() });
        }
        manager.start_current();

        manager.handle_event(press(1, 9));
        manager.handle_event(press(9, 8));

        assert_eq!(manager.current_index(), 1);
    }
}
