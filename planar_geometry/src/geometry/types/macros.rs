/// Conversions from sequences of members into a tuple-struct collection such as
/// a ring (of coordinates) or a multipolygon (of polygons).
macro_rules! impl_member_conversions {
	($($collection:ty => $member:ty),* $(,)?) => {$(
		impl<T> From<Vec<T>> for $collection
		where
			$member: From<T>,
		{
			fn from(value: Vec<T>) -> Self {
				Self(value.into_iter().map(<$member>::from).collect())
			}
		}

		impl<'a, T> From<&'a Vec<T>> for $collection
		where
			$member: From<&'a T>,
		{
			fn from(value: &'a Vec<T>) -> Self {
				Self::from(value.as_slice())
			}
		}

		impl<'a, T> From<&'a [T]> for $collection
		where
			$member: From<&'a T>,
		{
			fn from(value: &'a [T]) -> Self {
				Self(value.iter().map(<$member>::from).collect())
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $collection
		where
			$member: From<&'a T>,
		{
			fn from(value: &'a [T; N]) -> Self {
				Self::from(value.as_slice())
			}
		}

		impl FromIterator<$member> for $collection {
			fn from_iter<I: IntoIterator<Item = $member>>(iter: I) -> Self {
				Self(iter.into_iter().collect())
			}
		}
	)*};
}

pub(crate) use impl_member_conversions;
