// src/core/speech.rs
//
// Utterance queue. The platform speech service this models plays
// utterances one after another without blocking the caller, so the queue
// only needs wall-clock pacing: the frame loop calls `tick` and the UI
// shows whatever is currently "speaking". Silent pauses are ordinary
// utterances at volume 0, which keeps the sequencing in one place.
//
// There is no audio backend here (see DESIGN.md); a real one would sit
// behind `current` exactly like the UI does.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::config::consts::SILENT_PAUSE;

#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub volume: f32,
}

impl Utterance {
    pub fn new<T: Into<String>>(text: T, rate: f32) -> Self {
        let text = text.into();
        let volume = if text == SILENT_PAUSE { 0.0 } else { 1.0 };
        Self { text, rate, volume }
    }

    pub fn is_silent(&self) -> bool {
        self.volume == 0.0
    }

    /// Rough playback time: a flat lead-in plus per-character time,
    /// scaled down by the speak rate.
    pub fn duration(&self) -> Duration {
        let ms = (300.0 + self.text.chars().count() as f32 * 60.0) / self.rate.max(0.1);
        Duration::from_millis(ms as u64)
    }
}

#[derive(Debug, Default)]
pub struct SpeechQueue {
    queue: VecDeque<Utterance>,
    current: Option<(Utterance, Instant)>,
}

impl SpeechQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, utterance: Utterance) {
        self.queue.push_back(utterance);
    }

    /// Queue a whole message sequence at one rate.
    pub fn speak_messages<I, T>(&mut self, messages: I, rate: f32)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        for msg in messages {
            self.enqueue(Utterance::new(msg, rate));
        }
    }

    /// Stop speaking: drops the queue and whatever is in flight.
    pub fn cancel(&mut self) {
        self.queue.clear();
        self.current = None;
    }

    pub fn is_speaking(&self) -> bool {
        self.current.is_some() || !self.queue.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Advance playback to `now`, finishing any utterances whose time has
    /// elapsed and promoting the next one.
    pub fn tick(&mut self, now: Instant) {
        loop {
            match &self.current {
                Some((utt, started)) => {
                    if now.duration_since(*started) >= utt.duration() {
                        self.current = None;
                    } else {
                        return;
                    }
                }
                None => match self.queue.pop_front() {
                    Some(next) => self.current = Some((next, now)),
                    None => return,
                },
            }
        }
    }

    /// Text currently being voiced; silent pauses read as None.
    pub fn current_text(&self) -> Option<&str> {
        match &self.current {
            Some((utt, _)) if !utt.is_silent() => Some(&utt.text),
            _ => None,
        }
    }

    /// Take everything still queued (including in flight), in play order.
    /// The CLI uses this instead of pacing.
    pub fn drain_all(&mut self) -> Vec<Utterance> {
        let mut out = Vec::with_capacity(self.queue.len() + 1);
        if let Some((utt, _)) = self.current.take() {
            out.push(utt);
        }
        out.extend(self.queue.drain(..));
        out
    }
}
