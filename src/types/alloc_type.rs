#[cfg(feature = "std")]
pub type Vec<T> = std::vec::Vec<T>;
#[cfg(not(feature = "std"))]
pub type Vec<T> = alloc::vec::Vec<T>;

#[cfg(feature = "std")]
pub type String = std::string::String;
#[cfg(not(feature = "std"))]
pub type String = alloc::string::String;

#[cfg(feature = "std")]
pub type VecIntoIter<T> = std::vec::IntoIter<T>;
#[cfg(not(feature = "std"))]
pub type VecIntoIter<T> = alloc::vec::IntoIter<T>;

#[cfg(feature = "std")]
pub type VecDeque<T> = std::collections::VecDeque<T>;
#[cfg(not(feature = "std"))]
pub type VecDeque<T> = alloc::collections::VecDeque<T>;

#[cfg(feature = "std")]
pub type VecDequeIntoIter<T> = std::collections::vec_deque::IntoIter<T>;
#[cfg(not(feature = "std"))]
pub type VecDequeIntoIter<T> = alloc::collections::vec_deque::IntoIter<T>;
