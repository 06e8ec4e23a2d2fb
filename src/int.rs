//! Arbitrary-width integers built on bit sequences.



//		Modules																	

#[cfg(test)]
#[path = "tests/int.rs"]
mod tests;



//		Packages																

use crate::{
	bits::{Bit, ONE, ZERO, from_digit, full_add, to_digit},
	bitstring::BitString,
	errors::{ArithmeticError, ConversionError},
};
use core::{
	fmt::{Binary, Debug, Display, Formatter, self},
	hash::{Hash, Hasher},
	iter::{FusedIterator, Sum, repeat},
	ops::{Add, AddAssign, Deref, Shl, ShlAssign},
	str::FromStr,
};
use serde::{
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
	de::{Error as SerdeError, SeqAccess, Visitor},
};
use serde_json::Error as JsonError;



//		Constants																

/// The most bits to reserve up front when reading a sequence of bits.
const MAX_PREALLOCATED_BITS: usize = 4096;



//		Type aliases															

/// Type alias for integers read as plain binary, for convenience.
pub type BinaryInt = Integer<false>;

/// Type alias for integers read as two's complement, for convenience.
pub type TwosComplimentInt = Integer<true>;



//		Structs																	

//		Integer																	
/// An arbitrary-width integer.
/// 
/// This type gives arithmetic meaning to a [`BitString`]. The first bit of the
/// sequence is the least-significant digit and the last bit is the
/// most-significant digit. Iterating over an [`Integer`] (which dereferences to
/// its [`BitString`]) yields the bits in that same order.
/// 
/// # Type parameters
/// 
/// * `SIGNED` - Whether the bits are meant to be read as two's complement
///              (`true`) or as plain binary (`false`).
/// 
/// # Variants
/// 
/// The two variants, [`BinaryInt`] and [`TwosComplimentInt`], share this one
/// implementation. The flag only records the intended interpretation: no
/// operation behaves differently because of it. What it does do is keep the
/// variants apart, so that the two are never mixed by accident:
/// 
///   1. Integers of different variants are never equal, even when their bits
///      are identical. `==` only compares within a variant, and
///      [`equals()`](Integer::equals()) returns `false` across variants.
///   2. The operators (`+` and `<<`) only accept operands of the same variant.
///   3. [`try_add()`](Integer::try_add()) accepts any variant, and returns
///      [`ArithmeticError::VariantMismatch`] if the variants differ.
/// 
/// # Width
/// 
/// The width of an integer is the number of bits it stores. It is not part of
/// the value: the bits past the most-significant stored digit are taken to be
/// [`ZERO`]. This means that `1011` stored in four bits is equal to `01011`
/// stored in five.
/// 
/// Results are never wider than their operands. Addition is performed modulo
/// 2^w, where w is the width of the wider operand, and a left shift keeps the
/// width of the value being shifted.
/// 
/// # Immutability
/// 
/// An [`Integer`] never changes once created. Every operation builds a new
/// bit sequence for its result.
/// 
#[derive(Clone, Default)]
pub struct Integer<const SIGNED: bool>(BitString);

//󰭅		Integer																	
impl<const SIGNED: bool> Integer<SIGNED> {
	//		Public constants														
	/// The name of the variant, used in messages.
	pub const NAME: &'static str = if SIGNED { "TwosComplimentInt" } else { "BinaryInt" };
	
	//		Constructors															
	
	//		new																		
	/// Creates a new [`Integer`] from bits.
	/// 
	/// # Parameters
	/// 
	/// * `bits` - The bits of the integer, least-significant first. Any finite
	///            sequence is accepted, including an empty one.
	/// 
	pub fn new<I>(bits: I) -> Self
	where
		I: IntoIterator<Item = Bit>,
	{
		Self(BitString::new(bits))
	}
	
	//		one																		
	/// The value one, stored in a single bit.
	#[must_use]
	pub fn one() -> Self {
		Self::new([ONE])
	}
	
	//		zero																	
	/// The value zero, stored in the given number of bits.
	/// 
	/// # Parameters
	/// 
	/// * `width` - The number of bits to store.
	/// 
	#[must_use]
	pub fn zero(width: usize) -> Self {
		Self::new(repeat(ZERO).take(width))
	}
	
	//		Public methods															
	
	//		bit																		
	/// Gets the value of a specific bit.
	/// 
	/// Returns [`ZERO`] if the position is past the stored width, as every
	/// integer is taken to continue with zeros in that direction.
	/// 
	/// # Parameters
	/// 
	/// * `pos` - The position of the bit to get, where `0` is the
	///           least-significant bit.
	/// 
	#[must_use]
	pub fn bit(&self, pos: usize) -> Bit {
		self.0.get(pos).unwrap_or(ZERO)
	}
	
	//		count_iter																
	/// Counts up from zero to this integer.
	/// 
	/// The returned iterator yields every value from zero upwards, stopping as
	/// soon as the count becomes equal to `self` (which is not itself yielded).
	/// Each value is stored in the same width as `self`.
	/// 
	/// ```
	/// use bitints::{BinaryInt, ONE, ZERO};
	/// 
	/// let counts: Vec<String> = BinaryInt::new([ONE, ONE, ZERO])
	///     .count_iter()
	///     .map(|count| count.to_string())
	///     .collect();
	/// assert_eq!(counts, ["000", "001", "010"]);
	/// ```
	/// 
	#[must_use]
	pub fn count_iter(&self) -> CountIter<SIGNED> {
		CountIter {
			current: Some(Self::zero(self.width())),
			target:  self.clone(),
			step:    Self::one(),
		}
	}
	
	//		count_ones																
	/// Returns the number of [`ONE`] bits.
	#[must_use]
	pub fn count_ones(&self) -> usize {
		self.iter().filter(|&bit| bit == ONE).count()
	}
	
	//		equals																	
	/// Compares for value equality with an integer of either variant.
	/// 
	/// Integers of different variants are never equal, even when their bits are
	/// identical. Otherwise this is the same comparison as `==`, so stored width
	/// plays no part: high-order [`ZERO`]s are ignored.
	/// 
	/// The [`PartialEq`] implementation only compares integers of the same
	/// variant, which keeps `==` free of inference ambiguity. This method is
	/// the way to compare across variants.
	/// 
	/// # Parameters
	/// 
	/// * `other` - The integer to compare with.
	/// 
	#[must_use]
	pub fn equals<const R: bool>(&self, other: &Integer<R>) -> bool {
		SIGNED == R && (0..self.width().max(other.width())).all(|pos| self.bit(pos) == other.bit(pos))
	}
	
	//		from_json																
	/// Deserialises an integer from a JSON string.
	/// 
	/// # Parameters
	/// 
	/// * `json` - The JSON string to deserialise, holding the digits
	///            most-significant first.
	/// 
	/// # Errors
	/// 
	/// If the JSON is not a string of binary digits, an error will be returned.
	/// 
	pub fn from_json(json: &str) -> Result<Self, JsonError> {
		serde_json::from_str(json)
	}
	
	//		into_bitstring															
	/// Gives up the arithmetic meaning and returns the underlying bits.
	#[must_use]
	pub fn into_bitstring(self) -> BitString {
		self.0
	}
	
	//		is_zero																	
	/// Whether every bit is [`ZERO`].
	#[must_use]
	pub fn is_zero(&self) -> bool {
		self.iter().all(|bit| bit == ZERO)
	}
	
	//		overflowing_add															
	/// Overflowing addition.
	/// 
	/// Computes `self + rhs` modulo 2^w, where w is the width of the wider
	/// operand, returning a tuple of the result and the final carry. The carry
	/// is [`ONE`] if the true sum does not fit in w bits.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to add to `self`.
	/// 
	#[must_use]
	pub fn overflowing_add(&self, rhs: &Self) -> (Self, Bit) {
		self.ripple_add(&rhs.0)
	}
	
	//		parse																	
	/// Parses an integer from a string of binary digits.
	/// 
	/// The digits are read most-significant first, i.e. in the order produced
	/// by the [`Display`] implementation. See the [`FromStr`] implementation
	/// for details.
	/// 
	/// # Parameters
	/// 
	/// * `s` - The string to parse.
	/// 
	/// # Errors
	/// 
	/// If the string holds anything other than binary digits, an error will be
	/// returned.
	/// 
	pub fn parse(s: &str) -> Result<Self, ConversionError> {
		s.parse()
	}
	
	//		shift_left																
	/// Shifts the bits towards the most-significant end.
	/// 
	/// The result has the same width as `self`. The lowest `shift` positions
	/// are filled with [`ZERO`], and the original bits follow on above them,
	/// with any that no longer fit being dropped. Shifting by the width of
	/// `self` or more therefore gives a result that is all zeros.
	/// 
	/// # Parameters
	/// 
	/// * `shift` - The number of positions to shift by.
	/// 
	#[must_use]
	pub fn shift_left(&self, shift: &Self) -> Self {
		let width   = self.width();
		let padding = shift.magnitude_up_to(width);
		Self::new(repeat(ZERO).take(padding).chain(self.iter()).take(width))
	}
	
	//		significant_width														
	/// The number of bits needed to hold the value.
	/// 
	/// This is the position of the most-significant [`ONE`] plus one, or zero
	/// if there are no [`ONE`] bits. Any stored bits above it are padding.
	/// 
	#[must_use]
	pub fn significant_width(&self) -> usize {
		self.iter().rposition(|bit| bit == ONE).map_or(0, |pos| pos.saturating_add(1))
	}
	
	//		to_json																	
	/// Serialises this integer to a JSON string.
	/// 
	/// # Errors
	/// 
	/// If the number cannot be serialised for whatever reason, an error will be
	/// returned. In reality this should be infallible.
	/// 
	pub fn to_json(&self) -> Result<String, JsonError> {
		serde_json::to_string(self)
	}
	
	//		try_add																	
	/// Checked addition across variants.
	/// 
	/// Computes `self + rhs` in the same way as [`wrapping_add()`](Integer::wrapping_add()),
	/// but accepts an integer of either variant on the right.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to add to `self`.
	/// 
	/// # Errors
	/// 
	/// If `rhs` is not the same variant as `self`, an error will be returned and
	/// no addition will be performed.
	/// 
	pub fn try_add<const R: bool>(&self, rhs: &Integer<R>) -> Result<Self, ArithmeticError> {
		if SIGNED != R {
			return Err(ArithmeticError::VariantMismatch {
				lhs: Self::NAME,
				rhs: Integer::<R>::NAME,
			});
		}
		Ok(self.ripple_add(&rhs.0).0)
	}
	
	//		wrapping_add															
	/// Wrapping (modular) addition.
	/// 
	/// Computes `self + rhs` modulo 2^w, where w is the width of the wider
	/// operand. The shorter operand is treated as if padded with [`ZERO`]s, and
	/// the carry out of the most-significant position is discarded. The result
	/// has width w.
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The value to add to `self`.
	/// 
	#[must_use]
	pub fn wrapping_add(&self, rhs: &Self) -> Self {
		self.ripple_add(&rhs.0).0
	}
	
	//		Private methods															
	
	//		magnitude_up_to															
	/// Reads the value of this integer, capped at a limit.
	/// 
	/// Returns the smaller of the value and `limit`. This allows a shift amount
	/// of any width to be compared against the width being shifted, without the
	/// value itself ever having to fit in a [`usize`].
	/// 
	/// # Parameters
	/// 
	/// * `limit` - The largest value of interest.
	/// 
	fn magnitude_up_to(&self, limit: usize) -> usize {
		let mut total = 0_usize;
		for (pos, bit) in self.iter().enumerate() {
			if bit == ZERO {
				continue;
			}
			//	A digit weighing at least the limit settles it
			let Some(weight) = u32::try_from(pos)
				.ok()
				.and_then(|p| 1_usize.checked_shl(p))
				.filter(|&weight| weight < limit)
			else {
				return limit;
			};
			total = total.saturating_add(weight);
			if total >= limit {
				return limit;
			}
		}
		total
	}
	
	//		ripple_add																
	/// Adds the bits of another sequence to this integer.
	/// 
	/// Walks both sequences from least to most significant, feeding each pair
	/// of bits and the running carry through the full adder. The shorter
	/// sequence is padded with [`ZERO`].
	/// 
	/// # Parameters
	/// 
	/// * `rhs` - The bits to add to `self`.
	/// 
	fn ripple_add(&self, rhs: &BitString) -> (Self, Bit) {
		let width     = self.width().max(rhs.width());
		let mut sum   = Vec::with_capacity(width);
		let mut carry = ZERO;
		for pos in 0..width {
			let (digit, carry_out) = full_add(self.bit(pos), rhs.get(pos).unwrap_or(ZERO), carry);
			sum.push(digit);
			carry = carry_out;
		}
		(Self::new(sum), carry)
	}
	
	//		to_digits																
	/// Writes out the digits, most-significant first.
	fn to_digits(&self) -> String {
		self.iter().rev().map(to_digit).collect()
	}
}

//󰭅		Add																		
impl<const SIGNED: bool> Add for Integer<SIGNED> {
	type Output = Self;
	
	//		add																		
	fn add(self, rhs: Self) -> Self::Output {
		self.wrapping_add(&rhs)
	}
}

//󰭅		Add<&>																	
impl<const SIGNED: bool> Add<&Integer<SIGNED>> for &Integer<SIGNED> {
	type Output = Integer<SIGNED>;
	
	//		add																		
	fn add(self, rhs: &Integer<SIGNED>) -> Self::Output {
		self.wrapping_add(rhs)
	}
}

//󰭅		AddAssign																
impl<const SIGNED: bool> AddAssign for Integer<SIGNED> {
	//		add_assign																
	fn add_assign(&mut self, rhs: Self) {
		*self = self.wrapping_add(&rhs);
	}
}

//󰭅		AddAssign<&>															
impl<const SIGNED: bool> AddAssign<&Self> for Integer<SIGNED> {
	//		add_assign																
	fn add_assign(&mut self, rhs: &Self) {
		*self = self.wrapping_add(rhs);
	}
}

//󰭅		Binary																	
impl<const SIGNED: bool> Binary for Integer<SIGNED> {
	//		fmt																		
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.pad_integral(true, "0b", &self.to_digits())
	}
}

//󰭅		Debug																	
impl<const SIGNED: bool> Debug for Integer<SIGNED> {
	//		fmt																		
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}({})", Self::NAME, self.to_digits())
	}
}

//󰭅		Deref																	
impl<const SIGNED: bool> Deref for Integer<SIGNED> {
	type Target = BitString;
	
	//		deref																	
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

//󰭅		Deserialize																
impl<'de, const SIGNED: bool> Deserialize<'de> for Integer<SIGNED> {
	//		deserialize																
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		if deserializer.is_human_readable() {
			//	Human-readable formats carry the written digits
			deserializer.deserialize_str(IntegerVisitor::<SIGNED>)
		} else {
			//	Binary formats carry the raw bits
			deserializer.deserialize_seq(IntegerVisitor::<SIGNED>)
		}
	}
}

//󰭅		Display																	
impl<const SIGNED: bool> Display for Integer<SIGNED> {
	//		fmt																		
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Every stored bit is written, including leading zeros
		f.pad(&self.to_digits())
	}
}

//󰭅		Eq																		
impl<const SIGNED: bool> Eq for Integer<SIGNED> {}

//󰭅		From: BitString -> Integer												
impl<const SIGNED: bool> From<BitString> for Integer<SIGNED> {
	//		from																	
	fn from(bits: BitString) -> Self {
		Self(bits)
	}
}

//󰭅		From: Integer -> BitString												
impl<const SIGNED: bool> From<Integer<SIGNED>> for BitString {
	//		from																	
	fn from(int: Integer<SIGNED>) -> Self {
		int.0
	}
}

//󰭅		FromIterator															
impl<const SIGNED: bool> FromIterator<Bit> for Integer<SIGNED> {
	//		from_iter																
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = Bit>,
	{
		Self::new(iter)
	}
}

//󰭅		FromStr																	
impl<const SIGNED: bool> FromStr for Integer<SIGNED> {
	type Err = ConversionError;
	
	//		from_str																
	/// Parses binary digits, most-significant first.
	/// 
	/// Surrounding whitespace and a leading `0b` are ignored. Every digit is
	/// kept, so the width of the result is the number of digits given, and an
	/// empty string gives an integer of width zero.
	/// 
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed  = s.trim();
		let digits   = trimmed.strip_prefix("0b").unwrap_or(trimmed);
		let mut bits = digits
			.chars()
			.map(|c| from_digit(c).ok_or(ConversionError::InvalidDigit(c)))
			.collect::<Result<Vec<_>, _>>()?;
		bits.reverse();
		Ok(Self::new(bits))
	}
}

//󰭅		Hash																	
impl<const SIGNED: bool> Hash for Integer<SIGNED> {
	//		hash																	
	fn hash<H: Hasher>(&self, state: &mut H) {
		//	Padding zeros are not part of the value, so must not be hashed
		let significant = self.significant_width();
		SIGNED.hash(state);
		significant.hash(state);
		for bit in self.iter().take(significant) {
			bit.hash(state);
		}
	}
}

//󰭅		PartialEq																
impl<const SIGNED: bool> PartialEq for Integer<SIGNED> {
	//		eq																		
	fn eq(&self, other: &Self) -> bool {
		self.equals(other)
	}
}

//󰭅		Serialize																
impl<const SIGNED: bool> Serialize for Integer<SIGNED> {
	//		serialize																
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		if serializer.is_human_readable() {
			serializer.serialize_str(&self.to_digits())
		} else {
			serializer.collect_seq(self.iter())
		}
	}
}

//󰭅		Shl																		
impl<const SIGNED: bool> Shl for Integer<SIGNED> {
	type Output = Self;
	
	//		shl																		
	fn shl(self, rhs: Self) -> Self::Output {
		self.shift_left(&rhs)
	}
}

//󰭅		Shl<&>																	
impl<const SIGNED: bool> Shl<&Integer<SIGNED>> for &Integer<SIGNED> {
	type Output = Integer<SIGNED>;
	
	//		shl																		
	fn shl(self, rhs: &Integer<SIGNED>) -> Self::Output {
		self.shift_left(rhs)
	}
}

//󰭅		ShlAssign																
impl<const SIGNED: bool> ShlAssign for Integer<SIGNED> {
	//		shl_assign																
	fn shl_assign(&mut self, rhs: Self) {
		*self = self.shift_left(&rhs);
	}
}

//󰭅		Sum																		
impl<const SIGNED: bool> Sum for Integer<SIGNED> {
	//		sum																		
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = Self>,
	{
		iter.fold(Self::default(), |acc, x| acc.wrapping_add(&x))
	}
}

//󰭅		Sum<&>																	
impl<'a, const SIGNED: bool> Sum<&'a Self> for Integer<SIGNED> {
	//		sum																		
	fn sum<I>(iter: I) -> Self
	where
		I: Iterator<Item = &'a Self>,
	{
		iter.fold(Self::default(), |acc, x| acc.wrapping_add(x))
	}
}

//		CountIter																
/// An iterator counting up towards an [`Integer`].
/// 
/// Created by [`Integer::count_iter()`]. It starts at zero, stored in the same
/// width as the target, and adds one on each step. It ends the moment the
/// count is equal to the target, so the target itself is never yielded and
/// counting to zero yields nothing at all.
/// 
/// The count is held in the width of the target, so it cannot outgrow it and
/// is bound to reach it.
/// 
#[derive(Clone, Debug)]
pub struct CountIter<const SIGNED: bool> {
	/// The next value to yield, or [`None`] once the target has been reached.
	current: Option<Integer<SIGNED>>,
	
	/// The value to count up to.
	target:  Integer<SIGNED>,
	
	/// The amount added on each step.
	step:    Integer<SIGNED>,
}

//󰭅		FusedIterator															
impl<const SIGNED: bool> FusedIterator for CountIter<SIGNED> {}

//󰭅		Iterator																
impl<const SIGNED: bool> Iterator for CountIter<SIGNED> {
	type Item = Integer<SIGNED>;
	
	//		next																	
	fn next(&mut self) -> Option<Self::Item> {
		let current = self.current.take()?;
		if current == self.target {
			return None;
		}
		self.current = Some(current.wrapping_add(&self.step));
		Some(current)
	}
}

//		IntegerVisitor															
/// A visitor for reading integers from strings or sequences of bits.
struct IntegerVisitor<const SIGNED: bool>;

//󰭅		Visitor																	
impl<'de, const SIGNED: bool> Visitor<'de> for IntegerVisitor<SIGNED> {
	type Value = Integer<SIGNED>;
	
	//		expecting																
	fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		write!(formatter, "a string of binary digits or a sequence of bits")
	}
	
	//		visit_seq																
	fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		//	The length hint comes from the input, so is not trusted in full
		let mut bits = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATED_BITS));
		while let Some(bit) = seq.next_element::<Bit>()? {
			bits.push(bit);
		}
		Ok(Integer::new(bits))
	}
	
	//		visit_str																
	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: SerdeError,
	{
		v.parse().map_err(E::custom)
	}
}


