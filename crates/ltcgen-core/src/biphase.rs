//! Bi-phase-mark modulation of codewords into audio samples.
//!
//! Every bit cell opens with a transition only when the data bit is 1 and
//! always carries the clock transition at its midpoint, which makes the
//! signal self-clocking, DC-balanced, and readable in either tape
//! direction. The encoder owns the output level and carries it across
//! frame boundaries; resetting it between frames would put a phase break
//! on every frame edge.

use crate::codeword::Codeword;

/// Bits per LTC frame.
pub const BITS_PER_FRAME: usize = 80;

/// Stateful bi-phase-mark encoder.
///
/// One encoder instance services an entire run so the level variable stays
/// continuous from the first frame to the last.
#[derive(Debug)]
pub struct BiphaseEncoder {
    level: f64,
}

impl BiphaseEncoder {
    /// Creates an encoder with the level at +1.0.
    pub fn new() -> Self {
        Self { level: 1.0 }
    }

    /// The level the next emitted sample would start from.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Modulates one codeword into exactly `samples_per_frame` samples.
    ///
    /// The frame is cut into 80 equal cells of `samples_per_frame / 80`
    /// samples; division remainder samples trail at the final level so the
    /// frame stays phase-continuous into its successor.
    pub fn encode_frame(&mut self, word: &Codeword, samples_per_frame: usize) -> Vec<f64> {
        let cell = samples_per_frame / BITS_PER_FRAME;
        assert!(cell >= 2, "bit cell must span at least two samples");

        let mut samples = Vec::with_capacity(samples_per_frame);
        for index in 0..BITS_PER_FRAME as u32 {
            if word.bit(index) {
                self.level = -self.level;
            }
            let half = cell / 2;
            for _ in 0..half {
                samples.push(self.level);
            }
            // mid-cell clock transition, unconditional
            self.level = -self.level;
            for _ in half..cell {
                samples.push(self.level);
            }
        }
        samples.resize(samples_per_frame, self.level);
        samples
    }
}

impl Default for BiphaseEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate::FrameRate;
    use crate::timecode::Timecode;

    fn transitions(samples: &[f64]) -> usize {
        samples.windows(2).filter(|w| w[0] != w[1]).count()
    }

    #[test]
    fn test_frame_length_and_range() {
        let mut enc = BiphaseEncoder::new();
        let word = Codeword::assemble(Timecode::zero(), FrameRate::Fps30);
        let samples = enc.encode_frame(&word, 1600);
        assert_eq!(samples.len(), 1600);
        assert!(samples.iter().all(|s| *s == 1.0 || *s == -1.0));
    }

    #[test]
    fn test_every_cell_has_mid_transition() {
        let mut enc = BiphaseEncoder::new();
        let word = Codeword::assemble(Timecode::new(10, 30, 15, 0), FrameRate::Fps25);
        let samples = enc.encode_frame(&word, 1920);
        let cell = 1920 / BITS_PER_FRAME;
        for bit in 0..BITS_PER_FRAME {
            let start = bit * cell;
            let mid = start + cell / 2;
            assert_ne!(
                samples[mid - 1], samples[mid],
                "missing clock transition in cell {bit}"
            );
        }
    }

    #[test]
    fn test_cell_boundary_transition_tracks_data_bit() {
        let mut enc = BiphaseEncoder::new();
        let word = Codeword::assemble(Timecode::new(10, 30, 15, 0), FrameRate::Fps25);
        let samples = enc.encode_frame(&word, 1920);
        let cell = 1920 / BITS_PER_FRAME;
        // Cell 0's boundary flip has no preceding sample to compare with.
        for bit in 1..BITS_PER_FRAME {
            let start = bit * cell;
            let flipped = samples[start - 1] != samples[start];
            assert_eq!(
                flipped,
                word.bit(bit as u32),
                "boundary of cell {bit} disagrees with data bit"
            );
        }
    }

    #[test]
    fn test_one_bits_double_the_cell_transitions() {
        let mut enc = BiphaseEncoder::new();
        let word = Codeword::assemble(Timecode::new(10, 30, 15, 0), FrameRate::Fps25);
        assert_eq!(word.count_ones(), 19);
        let samples = enc.encode_frame(&word, 1920);
        // 80 clock ticks plus one boundary flip per data-1 bit; the flip
        // opening cell 0 (a zero bit here anyway) is not visible inside a
        // single frame's buffer.
        assert_eq!(transitions(&samples), 80 + 19);
    }

    #[test]
    fn test_level_persists_across_frames() {
        let rate = FrameRate::Fps30;
        let mut tc = Timecode::zero();
        let mut enc = BiphaseEncoder::new();

        let first = enc.encode_frame(&Codeword::assemble(tc, rate), 1600);
        tc.advance(rate);
        let entry_level = enc.level();
        let word = Codeword::assemble(tc, rate);
        let second = enc.encode_frame(&word, 1600);

        // Frame N+1 continues from frame N's closing level; its first
        // sample differs from it exactly when bit 0 carries a one.
        let expected_first = if word.bit(0) {
            -first[1599]
        } else {
            first[1599]
        };
        assert_eq!(entry_level, first[1599]);
        assert_eq!(second[0], expected_first);
    }

    #[test]
    fn test_dc_balance_even_cells() {
        // With an even cell width and no remainder, both halves of every
        // cell cancel exactly.
        let mut enc = BiphaseEncoder::new();
        for frame in 0..4u8 {
            let word = Codeword::assemble(Timecode::new(0, 0, 0, frame), FrameRate::Fps25);
            let samples = enc.encode_frame(&word, 1920);
            let sum: f64 = samples.iter().sum();
            assert_eq!(sum, 0.0, "frame {frame}");
        }
    }

    #[test]
    fn test_remainder_samples_trail_at_last_level() {
        // 29.97 at 48 kHz: 1601 samples, cell 20, one remainder sample.
        let mut enc = BiphaseEncoder::new();
        let word = Codeword::assemble(Timecode::zero(), FrameRate::Fps29_97);
        let samples = enc.encode_frame(&word, 1601);
        assert_eq!(samples.len(), 1601);
        assert_eq!(samples[1600], samples[1599]);
        assert_eq!(samples[1600], enc.level());
    }

    #[test]
    #[should_panic(expected = "bit cell must span at least two samples")]
    fn test_rejects_sub_two_sample_cells() {
        let mut enc = BiphaseEncoder::new();
        let word = Codeword::assemble(Timecode::zero(), FrameRate::Fps30);
        enc.encode_frame(&word, 159);
    }
}
