//! Fixed-width binary encoding of real-valued parameter vectors.
//!
//! Each decision parameter occupies `bits_per_parameter` consecutive bits,
//! read most-significant bit first, and is mapped linearly onto its
//! `(min, max)` bounds:
//!
//! ```text
//! value = min + (max - min) / (2^bits - 1) * int_val
//! ```
//!
//! The maximum quantization error for a parameter is therefore
//! `(max - min) / (2^bits - 1)`.

use rand::Rng;

/// Largest supported `bits_per_parameter`; keeps every grid point exact in `f64`.
pub const MAX_BITS_PER_PARAMETER: usize = 52;

/// A fixed-length bit sequence. `true` is a one bit.
pub type Bitstring = Vec<bool>;

/// Decodes a bitstring into a real-valued vector.
///
/// Parameter `i` is read from bits `i * bits_per_parameter ..
/// (i + 1) * bits_per_parameter` in big-endian order.
///
/// Decoded values always lie in `[min, max]`, including bounds whose width
/// `max - min` overflows `f64`.
///
/// # Panics
///
/// Panics if `bits_per_parameter` is outside `1..=MAX_BITS_PER_PARAMETER`,
/// or if `bits.len() != bounds.len() * bits_per_parameter`.
///
/// # Example
///
/// ```
/// use u_pareto::codec::decode;
///
/// let bounds = [(-10.0, 10.0)];
/// assert_eq!(decode(&[false, false, false, false], &bounds, 4), vec![-10.0]);
/// assert_eq!(decode(&[true, true, true, true], &bounds, 4), vec![10.0]);
/// ```
pub fn decode(bits: &[bool], bounds: &[(f64, f64)], bits_per_parameter: usize) -> Vec<f64> {
    assert_eq!(
        bits.len(),
        bounds.len() * bits_per_parameter,
        "bitstring length must equal bounds.len() * bits_per_parameter"
    );

    let scale = max_int(bits_per_parameter);
    bits.chunks(bits_per_parameter)
        .zip(bounds)
        .map(|(chunk, &(min, max))| {
            let int_val = chunk
                .iter()
                .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit));
            let range = max - min;
            if range.is_finite() {
                min + range / scale * int_val as f64
            } else {
                let t = int_val as f64 / scale;
                min * (1.0 - t) + max * t
            }
        })
        .collect()
}

/// Encodes a real-valued vector onto the nearest grid point of each
/// parameter.
///
/// Values outside their bounds are clamped first, so
/// `decode(encode(v))` never leaves the search space.
///
/// # Panics
///
/// Panics if `bits_per_parameter` is outside `1..=MAX_BITS_PER_PARAMETER`,
/// or if `vector.len() != bounds.len()`.
pub fn encode(vector: &[f64], bounds: &[(f64, f64)], bits_per_parameter: usize) -> Bitstring {
    assert_eq!(
        vector.len(),
        bounds.len(),
        "vector and bounds must have equal length"
    );

    let scale = max_int(bits_per_parameter);
    let mut bits = Vec::with_capacity(vector.len() * bits_per_parameter);
    for (&v, &(min, max)) in vector.iter().zip(bounds) {
        // Halved so that the width of (-f64::MAX, f64::MAX) stays finite.
        let half_range = max / 2.0 - min / 2.0;
        let int_val = if half_range > 0.0 {
            let t = ((v / 2.0 - min / 2.0) / half_range).clamp(0.0, 1.0);
            (t * scale).round() as u64
        } else {
            0
        };
        for shift in (0..bits_per_parameter).rev() {
            bits.push((int_val >> shift) & 1 == 1);
        }
    }
    bits
}

/// Samples a bitstring of `len` independent fair bits.
pub fn random_bitstring<R: Rng>(len: usize, rng: &mut R) -> Bitstring {
    (0..len).map(|_| rng.random_bool(0.5)).collect()
}

/// Renders a bitstring as `'0'`/`'1'` characters.
pub fn bitstring_to_string(bits: &[bool]) -> String {
    bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
}

/// Quantization step `(max - min) / (2^bits - 1)` for one parameter.
///
/// # Panics
///
/// Panics if `bits_per_parameter` is outside `1..=MAX_BITS_PER_PARAMETER`.
pub fn resolution(bounds: (f64, f64), bits_per_parameter: usize) -> f64 {
    let scale = max_int(bits_per_parameter);
    bounds.1 / scale - bounds.0 / scale
}

fn max_int(bits_per_parameter: usize) -> f64 {
    assert!(
        (1..=MAX_BITS_PER_PARAMETER).contains(&bits_per_parameter),
        "bits_per_parameter must be in 1..={MAX_BITS_PER_PARAMETER}, got {bits_per_parameter}"
    );
    ((1u64 << bits_per_parameter) - 1) as f64
}
