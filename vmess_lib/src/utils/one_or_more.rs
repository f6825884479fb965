/**********************************************************************

Copyright (C) 2021 by reddal

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.

**********************************************************************/

use serde::{Serialize, Serializer};
use std::fmt;

/// A value that serializes either as a scalar or as a sequence.
///
/// Some sing-box fields accept both forms. [`OneOrMany::One`] is written
/// as the bare value, [`OneOrMany::Many`] as a JSON array (even if it only
/// holds one element).
pub enum OneOrMany<T> {
	One([T; 1]),
	Many(Vec<T>),
}

impl<T> OneOrMany<T> {
	#[inline]
	#[must_use]
	pub fn new_one(val: T) -> Self {
		Self::One([val])
	}

	#[inline]
	#[must_use]
	pub fn new_many(vals: Vec<T>) -> Self {
		Self::Many(vals)
	}
}

impl<T: Clone> Clone for OneOrMany<T> {
	fn clone(&self) -> Self {
		match self {
			OneOrMany::One(v) => Self::One(v.clone()),
			OneOrMany::Many(v) => Self::Many(v.clone()),
		}
	}
}

impl<T: PartialEq> PartialEq for OneOrMany<T> {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::One(a), Self::One(b)) => a == b,
			(Self::Many(a), Self::Many(b)) => a == b,
			_ => false,
		}
	}
}

impl<T: Eq> Eq for OneOrMany<T> {}

impl<T: fmt::Debug> fmt::Debug for OneOrMany<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::One([data]) => fmt::Debug::fmt(data, f),
			Self::Many(data) => fmt::Debug::fmt(data, f),
		}
	}
}

impl<T: Serialize> Serialize for OneOrMany<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::One([val]) => val.serialize(serializer),
			Self::Many(vals) => vals.serialize(serializer),
		}
	}
}
