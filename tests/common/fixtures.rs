//! Common test fixtures
//!
//! Declaration traces of small C-Minus programs, as the analysis pass
//! would report them.

use super::harness::Event::{self, Declare, Enter, Use};
use symtab::ExpType::{Integer, IntegerArray, Void};

/// ```text
///  1  int gcd(int u, int v)
///  2  {
///  3      if (v == 0) return u;
///  4      else return gcd(v, u - u / v * v);
///  5  }
///  6  void main(void)
///  7  {   int x; int y;
///  8      x = 10; y = 4;
///  9      gcd(x, y);
/// 10  }
/// ```
pub const GCD: &[Event] = &[
    Declare { scope: "global", name: "gcd", ty: Integer, line: 1 },
    Enter { scope: "gcd", parent: "global" },
    Declare { scope: "gcd", name: "u", ty: Integer, line: 1 },
    Declare { scope: "gcd", name: "v", ty: Integer, line: 1 },
    Use { scope: "gcd", name: "v", line: 3 },
    Use { scope: "gcd", name: "u", line: 3 },
    Use { scope: "gcd", name: "gcd", line: 4 },
    Use { scope: "gcd", name: "v", line: 4 },
    Use { scope: "gcd", name: "u", line: 4 },
    Use { scope: "gcd", name: "u", line: 4 },
    Use { scope: "gcd", name: "v", line: 4 },
    Use { scope: "gcd", name: "v", line: 4 },
    Declare { scope: "global", name: "main", ty: Void, line: 6 },
    Enter { scope: "main", parent: "global" },
    Declare { scope: "main", name: "x", ty: Integer, line: 7 },
    Declare { scope: "main", name: "y", ty: Integer, line: 7 },
    Use { scope: "main", name: "x", line: 8 },
    Use { scope: "main", name: "y", line: 8 },
    Use { scope: "main", name: "gcd", line: 9 },
    Use { scope: "main", name: "x", line: 9 },
    Use { scope: "main", name: "y", line: 9 },
];

/// ```text
///  1  int n;
///  2  int a[10];
///  3  void fill(int a[])
///  4  {   int n;
///  5      n = 0;
///  6      while (n < 10) { a[n] = n; n = n + 1; }
///  7  }
/// ```
pub const SHADOWED_GLOBALS: &[Event] = &[
    Declare { scope: "global", name: "n", ty: Integer, line: 1 },
    Declare { scope: "global", name: "a", ty: IntegerArray, line: 2 },
    Declare { scope: "global", name: "fill", ty: Void, line: 3 },
    Enter { scope: "fill", parent: "global" },
    Declare { scope: "fill", name: "a", ty: IntegerArray, line: 3 },
    Declare { scope: "fill", name: "n", ty: Integer, line: 4 },
    Use { scope: "fill", name: "n", line: 5 },
    Use { scope: "fill", name: "n", line: 6 },
    Use { scope: "fill", name: "a", line: 6 },
    Use { scope: "fill", name: "n", line: 6 },
    Use { scope: "fill", name: "n", line: 6 },
    Use { scope: "fill", name: "n", line: 6 },
    Use { scope: "fill", name: "n", line: 6 },
];

/// Nested blocks three levels deep plus a sibling function
pub const NESTED_BLOCKS: &[Event] = &[
    Declare { scope: "global", name: "limit", ty: Integer, line: 1 },
    Declare { scope: "global", name: "f", ty: Void, line: 2 },
    Enter { scope: "f", parent: "global" },
    Declare { scope: "f", name: "i", ty: Integer, line: 3 },
    Enter { scope: "f.block1", parent: "f" },
    Declare { scope: "f.block1", name: "t", ty: Integer, line: 5 },
    Use { scope: "f.block1", name: "limit", line: 6 },
    Use { scope: "f.block1", name: "i", line: 6 },
    Declare { scope: "global", name: "g", ty: Void, line: 9 },
    Enter { scope: "g", parent: "global" },
    Use { scope: "g", name: "t", line: 10 },
    Use { scope: "g", name: "i", line: 11 },
    Use { scope: "g", name: "limit", line: 12 },
];
