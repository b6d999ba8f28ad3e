//! Trigonometric functions.
//!
//! Sine is evaluated by a [`TrigBackend`]. On x86/x86_64 with the `x87-trig`
//! feature the default backend runs the `fsin` instruction; everywhere else it
//! is the [`Software`] minimax approximation. Cosine is always the phase-shifted
//! sine of the same backend, so `cos(x) == sin(x + PI_2)` holds bit for bit.

use super::consts::PI_2;
use super::float::ceil;

/// A sine evaluator.
pub trait TrigBackend {
    /// Sine of `x` radians.
    fn sin(&self, x: f32) -> f32;
}

/// Software sine: quadrant reduction followed by minimax kernels.
///
/// Absolute error stays below 2e-6 for `|x| <= 1e4`. The reduction loses
/// accuracy beyond that and carries no information once `|x| >= 2^24`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Software;

// π/2 split so that q * PIO2_HI is exact for any reachable quadrant count.
const PIO2_HI: f32 = 1.5703125;
const PIO2_MID: f32 = 4.837_512_969_970_703e-4;
const PIO2_LO: f32 = 7.549_789_954_891_882e-8;
const FRAC_2_PI: f32 = 1.0 / PI_2;

// sin(r) ~ r + r^3 (S1 + r^2 (S2 + r^2 S3)) on [-π/4, π/4]
const S1: f32 = -1.666_665_461_1e-1;
const S2: f32 = 8.332_160_873_6e-3;
const S3: f32 = -1.951_529_589_1e-4;
// cos(r) ~ 1 - r^2/2 + r^4 (C1 + r^2 (C2 + r^2 C3)) on [-π/4, π/4]
const C1: f32 = 4.166_664_568_298_827e-2;
const C2: f32 = -1.388_731_625_493_765e-3;
const C3: f32 = 2.443_315_711_809_948e-5;

#[inline]
fn sin_kernel(r: f32) -> f32 {
    let z = r * r;
    r + r * z * (S1 + z * (S2 + z * S3))
}

#[inline]
fn cos_kernel(r: f32) -> f32 {
    let z = r * r;
    1.0 - 0.5 * z + z * z * (C1 + z * (C2 + z * C3))
}

impl TrigBackend for Software {
    fn sin(&self, x: f32) -> f32 {
        // Nearest quadrant count; `as` saturates for huge or NaN input.
        let q = ceil(x * FRAC_2_PI - 0.5) as i32;
        let qf = q as f32;
        let r = ((x - qf * PIO2_HI) - qf * PIO2_MID) - qf * PIO2_LO;
        match q & 3 {
            0 => sin_kernel(r),
            1 => cos_kernel(r),
            2 => -sin_kernel(r),
            _ => -cos_kernel(r),
        }
    }
}

/// Hardware sine through the x87 `fsin` instruction.
///
/// Accuracy is whatever the FPU provides; `fsin` only reduces arguments with
/// `|x| < 2^63` and leaves larger operands unchanged.
#[cfg(all(feature = "x87-trig", any(target_arch = "x86", target_arch = "x86_64")))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct X87;

#[cfg(all(feature = "x87-trig", any(target_arch = "x86", target_arch = "x86_64")))]
impl TrigBackend for X87 {
    #[allow(unsafe_code)]
    fn sin(&self, x: f32) -> f32 {
        let mut v = x;
        // SAFETY: the operand is loaded from and stored back to `v`, a live
        // local. The x87 stack is left balanced and every x87 register is
        // declared clobbered.
        unsafe {
            core::arch::asm!(
                "fld dword ptr [{p}]",
                "fsin",
                "fstp dword ptr [{p}]",
                p = in(reg) core::ptr::addr_of_mut!(v),
                out("st(0)") _,
                out("st(1)") _,
                out("st(2)") _,
                out("st(3)") _,
                out("st(4)") _,
                out("st(5)") _,
                out("st(6)") _,
                out("st(7)") _,
                options(nostack),
            );
        }
        v
    }
}

/// Backend used by [`sin`] and [`cos`].
#[cfg(all(feature = "x87-trig", any(target_arch = "x86", target_arch = "x86_64")))]
pub type DefaultTrig = X87;

/// Backend used by [`sin`] and [`cos`].
#[cfg(not(all(feature = "x87-trig", any(target_arch = "x86", target_arch = "x86_64"))))]
pub type DefaultTrig = Software;

/// Sine of `x` on `backend`.
#[inline]
pub fn sin_with<B: TrigBackend + ?Sized>(x: f32, backend: &B) -> f32 {
    backend.sin(x)
}

/// Cosine of `x` on `backend`, as `sin(x + π/2)`.
#[inline]
pub fn cos_with<B: TrigBackend + ?Sized>(x: f32, backend: &B) -> f32 {
    backend.sin(x + PI_2)
}

#[inline]
pub fn sin(x: f32) -> f32 {
    sin_with(x, &DefaultTrig::default())
}

#[inline]
pub fn cos(x: f32) -> f32 {
    cos_with(x, &DefaultTrig::default())
}
