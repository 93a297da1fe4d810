/// Background music backend. The shell only ever starts one looping track
/// and pauses or resumes it from the sound toggle.
pub trait MusicPlayer {
    fn play(&mut self, track: &str);

    fn pause(&mut self);

    fn unpause(&mut self);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MusicState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Music backend that makes no sound and remembers what it was told.
#[derive(Debug, Clone, Default)]
pub struct SilentMusic {
    pub track: Option<String>,
    pub state: MusicState,
}

impl MusicPlayer for SilentMusic {
    fn play(&mut self, track: &str) {
        self.track = Some(track.to_string());
        self.state = MusicState::Playing;
    }

    fn pause(&mut self) {
        if self.state == MusicState::Playing {
            self.state = MusicState::Paused;
        }
    }

    fn unpause(&mut self) {
        if self.state == MusicState::Paused {
            self.state = MusicState::Playing;
        }
    }
}
