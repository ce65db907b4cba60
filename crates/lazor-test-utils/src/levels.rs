//! Level-file texts used across loader, engine and binary tests.
//!
//! - [`ADJACENT_TARGET`]: open 3×3 grid, one laser one step from a target.
//! - [`ABSORBED`]: opaque block between the laser and its target.
//! - [`MIRROR_RETURN`]: reflective block bouncing the laser back out.
//! - [`TWO_LASERS`]: first laser misses, second reaches a target.
//! - [`REFRACTED_CORNER`]: refractive block turning a laser into a target.

/// Open 3×3 grid; the laser at (1,0) heading east lands on (1,1).
pub const ADJACENT_TARGET: &str = "\
# open board
GRID START
ooo
ooo
ooo
GRID STOP

L 1 0 0 1
P 1 1
";

/// 3×3 grid with an opaque block at (1,1) in front of the target (2,1).
pub const ABSORBED: &str = "\
GRID START
ooo
oBo
ooo
GRID STOP
L 0 1 1 0
P 2 1
";

/// 3×3 grid with a reflective block at (1,1); no target on the way back.
pub const MIRROR_RETURN: &str = "\
GRID START
ooo
oAo
ooo
GRID STOP
L 0 1 1 0
P 2 2
";

/// Two lasers on an open 4×4 grid. The first leaves the grid at once;
/// the second walks down column 2 onto (3,2). (0,0) is never reached.
pub const TWO_LASERS: &str = "\
GRID START
oooo
oooo
oooo
oooo
GRID STOP
L 0 0 -1 0
L 0 2 1 0
P 3 2
P 0 0
";

/// 3×3 grid with a refractive block at (0,1) sending the laser east.
pub const REFRACTED_CORNER: &str = "\
GRID START
oCo
ooo
ooo
GRID STOP
L -1 1 1 0
P 0 2
";
