//! Single-bit symbols and the bit-level primitives built on them.



//		Modules																	

#[cfg(test)]
#[path = "tests/bits.rs"]
mod tests;



//		Type aliases															

/// A single binary digit.
/// 
/// The two truth values are used purely as opaque symbols, named [`ONE`] and
/// [`ZERO`]. Code in this crate never relies on them meaning "true" or "false".
/// 
pub type Bit = bool;



//		Constants																

/// The binary digit one.
pub const ONE:  Bit = true;

/// The binary digit zero.
pub const ZERO: Bit = false;



//		Functions																

//		full_add																
/// Adds three bits together.
/// 
/// This is the full-adder lookup table, keyed by the two operand bits and the
/// incoming carry. The result is the sum digit along with the outgoing carry,
/// so the sum is `a ⊕ b ⊕ carry` and the carry is the majority of the three.
/// 
/// # Parameters
/// 
/// * `a`     - The bit from the first operand.
/// * `b`     - The bit from the second operand.
/// * `carry` - The carry coming in from the previous, less-significant
///             position.
/// 
#[must_use]
pub(crate) const fn full_add(a: Bit, b: Bit, carry: Bit) -> (Bit, Bit) {
	match (a, b, carry) {
		(ZERO, ZERO, ZERO)                                          => (ZERO, ZERO),
		(ONE,  ZERO, ZERO) | (ZERO, ONE,  ZERO) | (ZERO, ZERO, ONE) => (ONE,  ZERO),
		(ONE,  ONE,  ZERO) | (ONE,  ZERO, ONE)  | (ZERO, ONE,  ONE) => (ZERO, ONE),
		(ONE,  ONE,  ONE)                                           => (ONE,  ONE),
	}
}

//		from_digit																
/// Reads a bit from its written form.
/// 
/// Returns [`None`] if the character is not `1` or `0`.
/// 
/// # Parameters
/// 
/// * `c` - The character to read.
/// 
#[must_use]
pub(crate) const fn from_digit(c: char) -> Option<Bit> {
	match c {
		'1' => Some(ONE),
		'0' => Some(ZERO),
		_   => None,
	}
}

//		to_digit																
/// Writes a bit as `1` for [`ONE`] and `0` for [`ZERO`].
#[must_use]
pub(crate) const fn to_digit(bit: Bit) -> char {
	if bit == ONE { '1' } else { '0' }
}


