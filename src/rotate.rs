//! Left string rotation, recursive and iterative.
//!
//! The rotation is "left" by one position per step:
//! `rotate("hola", 1) = "olah"` — the first character moves to the end.
//! Positions count `char`s, never bytes, so multi-byte text stays valid.

/// Reduce an arbitrary shift to `0 <= r < len`.
///
/// Computes `((k mod n) + n) mod n` with `n = len`, so negative shifts and
/// shifts past the length wrap identically. A zero-length string always
/// normalizes to 0.
#[inline]
pub fn normalized_shift(len: usize, k: i64) -> usize {
    if len == 0 {
        return 0;
    }
    let n = len as i64;
    (((k % n) + n) % n) as usize
}

/// Left-rotate `w` by `k` positions in a single pass.
///
/// Splits `w` at the normalized shift and swaps the two halves:
/// the suffix from position r, then the prefix up to r. O(n) time,
/// one allocation.
pub fn rotate_iterative(w: &str, k: i64) -> String {
    let r = normalized_shift(w.chars().count(), k);
    if r == 0 {
        return w.to_string();
    }
    // Byte offset of the r-th char; r < char count, so the iterator yields it.
    let split = match w.char_indices().nth(r) {
        Some((at, _)) => at,
        None => w.len(),
    };
    let mut out = String::with_capacity(w.len());
    out.push_str(&w[split..]);
    out.push_str(&w[..split]);
    out
}

/// Left-rotate `w` by `k` positions, one character at a time.
///
/// The recurrence peels the first char, appends it to the end, and repeats
/// with one step fewer. Rust gives no tail-call guarantee, so the step count
/// is carried by an explicit loop instead of call frames; only the current
/// string is live at any point.
/// Equivalent to [`rotate_iterative`] for every `(w, k)`, just slower.
pub fn rotate_recursive(w: &str, k: i64) -> String {
    let r = normalized_shift(w.chars().count(), k);
    let mut s = w.to_string();
    for _ in 0..r {
        s = step(&s);
    }
    s
}

/// One rotation step: move the first char to the end.
fn step(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut next = String::with_capacity(s.len());
            next.push_str(chars.as_str());
            next.push(first);
            next
        }
        None => String::new(),
    }
}
