//! Immutable sequences of bits.



//		Modules																	

#[cfg(test)]
#[path = "tests/bitstring.rs"]
mod tests;



//		Packages																

use crate::bits::{Bit, to_digit};
use core::{
	fmt::{Debug, Formatter, self},
	iter::{Copied, FusedIterator},
	slice::Iter,
};
use serde::{Deserialize, Serialize};



//		Structs																	

//		BitString																
/// An ordered, fixed-length, immutable sequence of bits.
/// 
/// The bits are copied in when the [`BitString`] is created, so nothing done
/// to the source afterwards can affect it. There is no way to change the bits
/// once they are in place: operations that produce a different sequence always
/// build a new [`BitString`].
/// 
/// A [`BitString`] can be iterated over any number of times, and every
/// iteration starts again from bit `0`.
/// 
/// # Ordering
/// 
/// Bits are kept in the order they were supplied. When the sequence is used as
/// an integer, bit `0` is the least-significant digit, but the [`BitString`]
/// itself attaches no meaning to the order.
/// 
#[derive(Clone, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BitString(Box<[Bit]>);

//󰭅		BitString																
impl BitString {
	//		Constructors															
	
	//		new																		
	/// Creates a new [`BitString`] from any finite sequence of bits.
	/// 
	/// # Parameters
	/// 
	/// * `bits` - The bits to copy in, in order.
	/// 
	pub fn new<I>(bits: I) -> Self
	where
		I: IntoIterator<Item = Bit>,
	{
		Self(bits.into_iter().collect())
	}
	
	//		Public methods															
	
	//		as_slice																
	/// Represents the bits as a slice.
	#[must_use]
	pub fn as_slice(&self) -> &[Bit] {
		&self.0
	}
	
	//		get																		
	/// Gets the bit at a specific position.
	/// 
	/// Returns [`None`] if the position is past the end of the sequence.
	/// 
	/// # Parameters
	/// 
	/// * `pos` - The position of the bit to get, where `0` is the first bit.
	/// 
	#[must_use]
	pub fn get(&self, pos: usize) -> Option<Bit> {
		self.0.get(pos).copied()
	}
	
	//		is_empty																
	/// Whether the sequence holds no bits at all.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
	
	//		iter																	
	/// Returns a fresh iterator over the bits, starting from bit `0`.
	pub fn iter(&self) -> Bits<'_> {
		Bits(self.0.iter().copied())
	}
	
	//		to_vec																	
	/// Copies the bits out into a [`Vec`].
	#[must_use]
	pub fn to_vec(&self) -> Vec<Bit> {
		self.0.to_vec()
	}
	
	//		width																	
	/// The number of bits in the sequence.
	#[must_use]
	pub fn width(&self) -> usize {
		self.0.len()
	}
}

//󰭅		Debug																	
impl Debug for BitString {
	//		fmt																		
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		//	Written in storage order, not reading order
		write!(f, "BitString[")?;
		for bit in self.iter() {
			write!(f, "{}", to_digit(bit))?;
		}
		write!(f, "]")
	}
}

//󰭅		From: &[Bit] -> BitString												
impl From<&[Bit]> for BitString {
	//		from																	
	fn from(bits: &[Bit]) -> Self {
		Self(bits.into())
	}
}

//󰭅		From: [Bit; N] -> BitString												
impl<const N: usize> From<[Bit; N]> for BitString {
	//		from																	
	fn from(bits: [Bit; N]) -> Self {
		Self(bits.into())
	}
}

//󰭅		From: Vec<Bit> -> BitString												
impl From<Vec<Bit>> for BitString {
	//		from																	
	fn from(bits: Vec<Bit>) -> Self {
		Self(bits.into_boxed_slice())
	}
}

//󰭅		FromIterator															
impl FromIterator<Bit> for BitString {
	//		from_iter																
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = Bit>,
	{
		Self::new(iter)
	}
}

//󰭅		IntoIterator															
impl<'a> IntoIterator for &'a BitString {
	type Item     = Bit;
	type IntoIter = Bits<'a>;
	
	//		into_iter																
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

//		Bits																	
/// An iterator over the bits of a [`BitString`].
/// 
/// Created by [`BitString::iter()`]. Bits are yielded in storage order, which
/// for integers means least-significant first.
/// 
#[derive(Clone, Debug)]
pub struct Bits<'a>(Copied<Iter<'a, Bit>>);

//󰭅		DoubleEndedIterator														
impl DoubleEndedIterator for Bits<'_> {
	//		next_back																
	fn next_back(&mut self) -> Option<Self::Item> {
		self.0.next_back()
	}
}

//󰭅		ExactSizeIterator														
impl ExactSizeIterator for Bits<'_> {}

//󰭅		FusedIterator															
impl FusedIterator for Bits<'_> {}

//󰭅		Iterator																
impl Iterator for Bits<'_> {
	type Item = Bit;
	
	//		next																	
	fn next(&mut self) -> Option<Self::Item> {
		self.0.next()
	}
	
	//		size_hint																
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.0.size_hint()
	}
}


