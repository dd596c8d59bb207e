/// Creates an [`InplaceString`](crate::InplaceString) from a string literal,
/// checking the capacity at compile time.
///
/// # Forms
///
/// - `inplace_string!("lit")`: the capacity is the literal's length in
///   bytes, so the result is full.
/// - `inplace_string![CAP; "lit"]`: explicit capacity; a literal longer
///   than `CAP` is a compile error.
/// - `inplace_string![CAP;]`: empty, with explicit capacity.
///
/// # Examples
///
/// ```rust
/// use inplace_string::inplace_string;
///
/// let s = inplace_string!("test");
/// assert_eq!(s.capacity(), 4);
/// assert_eq!(s, "test");
///
/// let s = inplace_string![8; "hi"];
/// assert_eq!(s.capacity(), 8);
/// assert_eq!(s.len(), 2);
///
/// let s = inplace_string![10;];
/// assert!(s.is_empty());
/// ```
///
/// ```compile_fail
/// use inplace_string::inplace_string;
///
/// let s = inplace_string![2; "abc"];
/// ```
#[macro_export]
macro_rules! inplace_string {
  ($lit:literal) => {{
    const CAP: usize = $lit.len();
    $crate::InplaceString::<CAP>::from_units($lit.as_bytes())
  }};
  ($cap:expr;) => {{
    $crate::InplaceString::<{ $cap }>::new()
  }};
  ($cap:expr; $lit:literal) => {{
    const _: () = assert!(
      $cap >= $lit.len(),
      concat!(
        "inplace_string!: capacity ",
        stringify!($cap),
        " is smaller than the literal length"
      )
    );
    $crate::InplaceString::<{ $cap }>::from_units($lit.as_bytes())
  }};
}
