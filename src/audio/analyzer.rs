//! Real-time audio spectrum sampler
//!
//! The audio thread and the UI thread meet at a lock-free ring buffer:
//! - `AnalyzingSource` wraps the playing source, mixes each frame to mono and
//!   pushes it into the ring without ever blocking
//! - `SpectrumSampler` drains the ring once per tick and runs a 256-point FFT
//!   over the most recent samples
//!
//! Magnitudes follow the browser analyser convention: Hann window, temporal
//! smoothing, then dB mapped linearly from [-100, -30] onto a byte.

use std::collections::VecDeque;
use std::time::Duration;

use rodio::Source;
use rtrb::{Consumer, Producer, RingBuffer};
use spectrum_analyzer::windows::hann_window;
use spectrum_analyzer::{FrequencyLimit, samples_fft_to_spectrum};

/// FFT size - 256 samples gives 128 usable bins
pub const FFT_SIZE: usize = 256;

/// Number of frequency bins per snapshot
pub const FREQUENCY_BINS: usize = FFT_SIZE / 2;

/// Default temporal smoothing (0.0 = none, 1.0 = frozen)
pub const DEFAULT_SMOOTHING: f32 = 0.8;

/// dB value mapped to magnitude 0
const MIN_DECIBELS: f32 = -100.0;

/// dB value mapped to magnitude 255
const MAX_DECIBELS: f32 = -30.0;

/// Ring capacity in mono samples (~340ms at 48kHz)
const RING_CAPACITY: usize = 16384;

/// One tick's worth of per-bin magnitudes (0-255)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpectrumSnapshot {
    magnitudes: Vec<u8>,
}

impl SpectrumSnapshot {
    pub fn new(magnitudes: Vec<u8>) -> Self {
        Self { magnitudes }
    }

    pub fn magnitudes(&self) -> &[u8] {
        &self.magnitudes
    }

    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }
}

/// Producer half of the analysis ring, owned by the audio thread
pub struct SpectrumTap {
    producer: Producer<f32>,
}

impl SpectrumTap {
    /// Push one mono sample; dropped when the ring is full or the sampler is gone
    pub(super) fn push(&mut self, sample: f32) {
        if self.producer.is_abandoned() {
            return;
        }
        let _ = self.producer.push(sample);
    }
}

/// Consumer half of the analysis ring plus the FFT state
pub struct SpectrumSampler {
    consumer: Consumer<f32>,
    window: VecDeque<f32>,
    smoothed: Vec<f32>,
    sample_rate: u32,
    smoothing: f32,
}

impl SpectrumSampler {
    /// Create a sampler for audio at `sample_rate`
    ///
    /// The returned sampler starts disconnected; call [`connect`](Self::connect)
    /// for every fresh output path.
    pub fn new(sample_rate: u32, smoothing: f32) -> Self {
        let (_, consumer) = RingBuffer::new(1);
        Self {
            consumer,
            window: std::iter::repeat_n(0.0, FFT_SIZE).collect(),
            smoothed: vec![0.0; FREQUENCY_BINS],
            sample_rate: sample_rate.max(1),
            smoothing: smoothing.clamp(0.0, 0.99),
        }
    }

    /// Open a new ring and hand its producer to the next output path
    ///
    /// Any previous producer is orphaned and stops pushing. Smoothing history
    /// survives reconnects.
    pub fn connect(&mut self) -> SpectrumTap {
        let (producer, consumer) = RingBuffer::new(RING_CAPACITY);
        self.consumer = consumer;
        SpectrumTap { producer }
    }

    /// Drop the current ring so the spectrum decays to silence
    ///
    /// The output path's producer is orphaned and stops pushing.
    pub fn disconnect(&mut self) {
        let (_, consumer) = RingBuffer::new(1);
        self.consumer = consumer;
    }

    /// Snapshot the current spectrum without waiting for new audio
    pub fn sample(&mut self) -> SpectrumSnapshot {
        self.drain();
        self.update_spectrum();

        let range = MAX_DECIBELS - MIN_DECIBELS;
        let magnitudes = self
            .smoothed
            .iter()
            .map(|&mag| {
                if mag <= 0.0 {
                    return 0;
                }
                let db = 20.0 * mag.log10();
                (((db - MIN_DECIBELS) / range) * 255.0).clamp(0.0, 255.0) as u8
            })
            .collect();

        SpectrumSnapshot::new(magnitudes)
    }

    /// Move everything the audio thread produced into the FFT window
    ///
    /// Once the producer is gone (paused, stopped or track ended) and the ring
    /// is empty, the window is zeroed so smoothing decays to silence.
    fn drain(&mut self) {
        let mut received = false;
        while let Ok(sample) = self.consumer.pop() {
            if self.window.len() == FFT_SIZE {
                self.window.pop_front();
            }
            self.window.push_back(sample);
            received = true;
        }

        if !received && self.consumer.is_abandoned() {
            self.window.iter_mut().for_each(|sample| *sample = 0.0);
        }
    }

    fn update_spectrum(&mut self) {
        let samples: Vec<f32> = self.window.iter().copied().collect();
        let windowed = hann_window(&samples);

        let spectrum = match samples_fft_to_spectrum(
            &windowed,
            self.sample_rate,
            FrequencyLimit::All,
            None,
        ) {
            Ok(spectrum) => spectrum,
            Err(e) => {
                // Keep the previous frame on bad input (NaN samples etc.)
                tracing::debug!("Spectrum FFT skipped: {:?}", e);
                return;
            }
        };

        let smoothing = self.smoothing;
        let bins = spectrum.data().iter().map(|(_, mag)| mag.val());
        for (smoothed, raw) in self.smoothed.iter_mut().zip(bins) {
            let magnitude = raw / FFT_SIZE as f32;
            *smoothed = smoothing * *smoothed + (1.0 - smoothing) * magnitude;
        }
    }
}

/// Audio source wrapper that feeds a `SpectrumTap`
pub struct AnalyzingSource<S>
where
    S: Source<Item = f32>,
{
    source: S,
    tap: SpectrumTap,
    channels: u16,
    current_channel: u16,
    frame_sum: f32,
}

impl<S> AnalyzingSource<S>
where
    S: Source<Item = f32>,
{
    pub fn new(source: S, tap: SpectrumTap) -> Self {
        let channels = source.channels().max(1);
        Self {
            source,
            tap,
            channels,
            current_channel: 0,
            frame_sum: 0.0,
        }
    }
}

impl<S> Iterator for AnalyzingSource<S>
where
    S: Source<Item = f32>,
{
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        let sample = self.source.next()?;

        self.frame_sum += sample;
        self.current_channel += 1;
        if self.current_channel == self.channels {
            self.tap.push(self.frame_sum / self.channels as f32);
            self.frame_sum = 0.0;
            self.current_channel = 0;
        }

        Some(sample)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<S> Source for AnalyzingSource<S>
where
    S: Source<Item = f32>,
{
    fn current_span_len(&self) -> Option<usize> {
        self.source.current_span_len()
    }

    fn channels(&self) -> u16 {
        self.source.channels()
    }

    fn sample_rate(&self) -> u32 {
        self.source.sample_rate()
    }

    fn total_duration(&self) -> Option<Duration> {
        self.source.total_duration()
    }

    fn try_seek(&mut self, pos: Duration) -> Result<(), rodio::source::SeekError> {
        self.frame_sum = 0.0;
        self.current_channel = 0;
        self.source.try_seek(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rodio::buffer::SamplesBuffer;

    fn sine(freq: f32, sample_rate: u32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (std::f32::consts::TAU * freq * i as f32 / sample_rate as f32).sin())
            .collect()
    }

    #[test]
    fn test_silence_before_first_fill() {
        let mut sampler = SpectrumSampler::new(48000, DEFAULT_SMOOTHING);
        let snapshot = sampler.sample();
        assert_eq!(snapshot.len(), FREQUENCY_BINS);
        assert!(snapshot.magnitudes().iter().all(|&m| m == 0));
    }

    #[test]
    fn test_tone_peaks_in_matching_bin() {
        let sample_rate = 48000;
        let mut sampler = SpectrumSampler::new(sample_rate, 0.0);
        let mut tap = sampler.connect();

        // Bin width is 187.5Hz, so 3kHz lands exactly on bin 16.
        // Quiet enough that neither the peak nor its neighbours clip at 255.
        for sample in sine(3000.0, sample_rate, FFT_SIZE) {
            tap.push(sample * 0.01);
        }

        let snapshot = sampler.sample();
        let (peak, _) = snapshot
            .magnitudes()
            .iter()
            .enumerate()
            .max_by_key(|(_, m)| **m)
            .unwrap();
        assert_eq!(peak, 16);
        assert!(snapshot.magnitudes()[16] > 150);
        assert!(snapshot.magnitudes()[16] < 255);
        assert_eq!(snapshot.magnitudes()[60], 0);
    }

    #[test]
    fn test_analyzing_source_mixes_to_mono() {
        let mut sampler = SpectrumSampler::new(44100, DEFAULT_SMOOTHING);
        let tap = sampler.connect();

        let stereo = SamplesBuffer::new(2, 44100, vec![1.0, 0.0, 0.5, 0.5, -1.0, 1.0]);
        let passthrough: Vec<f32> = AnalyzingSource::new(stereo, tap).collect();
        assert_eq!(passthrough, vec![1.0, 0.0, 0.5, 0.5, -1.0, 1.0]);

        sampler.drain();
        let tail: Vec<f32> = sampler.window.iter().rev().take(3).copied().collect();
        assert_eq!(tail, vec![0.0, 0.5, 0.5]);
    }

    #[test]
    fn test_reconnect_orphans_old_tap() {
        let mut sampler = SpectrumSampler::new(44100, DEFAULT_SMOOTHING);
        let mut old = sampler.connect();
        let _new = sampler.connect();

        old.push(1.0);
        sampler.drain();
        assert!(sampler.window.iter().all(|&s| s == 0.0));
    }

    fn peak(snapshot: &SpectrumSnapshot) -> u8 {
        snapshot.magnitudes().iter().copied().max().unwrap_or(0)
    }

    #[test]
    fn test_spectrum_decays_after_producer_drops() {
        let sample_rate = 48000;
        let mut sampler = SpectrumSampler::new(sample_rate, DEFAULT_SMOOTHING);
        let mut tap = sampler.connect();
        for sample in sine(3000.0, sample_rate, FFT_SIZE) {
            tap.push(sample * 0.5);
        }
        drop(tap);

        assert!(peak(&sampler.sample()) > 0);
        for _ in 0..600 {
            sampler.sample();
        }
        assert_eq!(peak(&sampler.sample()), 0);
    }

    #[test]
    fn test_spectrum_decays_after_disconnect() {
        let sample_rate = 48000;
        let mut sampler = SpectrumSampler::new(sample_rate, DEFAULT_SMOOTHING);
        let mut tap = sampler.connect();
        for sample in sine(3000.0, sample_rate, FFT_SIZE) {
            tap.push(sample * 0.5);
        }
        assert!(peak(&sampler.sample()) > 0);

        // The tap is still alive, as with a paused sink that was not yet dropped
        sampler.disconnect();
        for sample in sine(3000.0, sample_rate, FFT_SIZE) {
            tap.push(sample * 0.5);
        }
        for _ in 0..600 {
            sampler.sample();
        }
        assert_eq!(peak(&sampler.sample()), 0);
    }

    #[test]
    fn test_live_producer_keeps_window_between_bursts() {
        let sample_rate = 48000;
        let mut sampler = SpectrumSampler::new(sample_rate, 0.0);
        let mut tap = sampler.connect();
        for sample in sine(3000.0, sample_rate, FFT_SIZE) {
            tap.push(sample * 0.01);
        }
        let first = sampler.sample();

        // No new samples this tick, but the output path is still open
        assert_eq!(sampler.sample(), first);
    }
}
