// @generated by `cargo xtask gen-ladder`. Do not edit by hand.

//! Fixed-arity pipe functions.
//!
//! `pipeN` threads a value through exactly `N` stages, left to right. Each stage's
//! output type is checked against the next stage's input type.

/// Returns `value` unchanged.
#[inline]
pub fn pipe0<A>(value: A) -> A {
    value
}

/// Applies one stage to `value`.
#[inline]
pub fn pipe1<A, B, F1>(
    value: A,
    f1: F1,
) -> B
where
    F1: FnOnce(A) -> B,
{
    f1(value)
}

/// Threads `value` through 2 stages, left to right.
#[inline]
pub fn pipe2<A, B, C, F1, F2>(
    value: A,
    f1: F1,
    f2: F2,
) -> C
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
{
    let value = f1(value);
    f2(value)
}

/// Threads `value` through 3 stages, left to right.
#[inline]
pub fn pipe3<A, B, C, D, F1, F2, F3>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
) -> D
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
{
    let value = f1(value);
    let value = f2(value);
    f3(value)
}

/// Threads `value` through 4 stages, left to right.
#[inline]
pub fn pipe4<A, B, C, D, E, F1, F2, F3, F4>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
) -> E
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    f4(value)
}

/// Threads `value` through 5 stages, left to right.
#[inline]
pub fn pipe5<A, B, C, D, E, F, F1, F2, F3, F4, F5>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
) -> F
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    f5(value)
}

/// Threads `value` through 6 stages, left to right.
#[inline]
pub fn pipe6<A, B, C, D, E, F, G, F1, F2, F3, F4, F5, F6>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
) -> G
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
    F6: FnOnce(F) -> G,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    let value = f5(value);
    f6(value)
}

/// Threads `value` through 7 stages, left to right.
#[inline]
pub fn pipe7<A, B, C, D, E, F, G, H, F1, F2, F3, F4, F5, F6, F7>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
    f7: F7,
) -> H
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
    F6: FnOnce(F) -> G,
    F7: FnOnce(G) -> H,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    let value = f5(value);
    let value = f6(value);
    f7(value)
}

/// Threads `value` through 8 stages, left to right.
#[inline]
pub fn pipe8<A, B, C, D, E, F, G, H, I, F1, F2, F3, F4, F5, F6, F7, F8>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
    f7: F7,
    f8: F8,
) -> I
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
    F6: FnOnce(F) -> G,
    F7: FnOnce(G) -> H,
    F8: FnOnce(H) -> I,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    let value = f5(value);
    let value = f6(value);
    let value = f7(value);
    f8(value)
}

/// Threads `value` through 9 stages, left to right.
#[inline]
pub fn pipe9<A, B, C, D, E, F, G, H, I, J, F1, F2, F3, F4, F5, F6, F7, F8, F9>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
    f7: F7,
    f8: F8,
    f9: F9,
) -> J
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
    F6: FnOnce(F) -> G,
    F7: FnOnce(G) -> H,
    F8: FnOnce(H) -> I,
    F9: FnOnce(I) -> J,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    let value = f5(value);
    let value = f6(value);
    let value = f7(value);
    let value = f8(value);
    f9(value)
}

/// Threads `value` through 10 stages, left to right.
#[inline]
pub fn pipe10<A, B, C, D, E, F, G, H, I, J, K, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
    f7: F7,
    f8: F8,
    f9: F9,
    f10: F10,
) -> K
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
    F6: FnOnce(F) -> G,
    F7: FnOnce(G) -> H,
    F8: FnOnce(H) -> I,
    F9: FnOnce(I) -> J,
    F10: FnOnce(J) -> K,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    let value = f5(value);
    let value = f6(value);
    let value = f7(value);
    let value = f8(value);
    let value = f9(value);
    f10(value)
}

/// Threads `value` through 11 stages, left to right.
#[inline]
pub fn pipe11<A, B, C, D, E, F, G, H, I, J, K, L, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
    f7: F7,
    f8: F8,
    f9: F9,
    f10: F10,
    f11: F11,
) -> L
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
    F6: FnOnce(F) -> G,
    F7: FnOnce(G) -> H,
    F8: FnOnce(H) -> I,
    F9: FnOnce(I) -> J,
    F10: FnOnce(J) -> K,
    F11: FnOnce(K) -> L,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    let value = f5(value);
    let value = f6(value);
    let value = f7(value);
    let value = f8(value);
    let value = f9(value);
    let value = f10(value);
    f11(value)
}

/// Threads `value` through 12 stages, left to right.
#[inline]
pub fn pipe12<A, B, C, D, E, F, G, H, I, J, K, L, M, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
    f7: F7,
    f8: F8,
    f9: F9,
    f10: F10,
    f11: F11,
    f12: F12,
) -> M
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
    F6: FnOnce(F) -> G,
    F7: FnOnce(G) -> H,
    F8: FnOnce(H) -> I,
    F9: FnOnce(I) -> J,
    F10: FnOnce(J) -> K,
    F11: FnOnce(K) -> L,
    F12: FnOnce(L) -> M,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    let value = f5(value);
    let value = f6(value);
    let value = f7(value);
    let value = f8(value);
    let value = f9(value);
    let value = f10(value);
    let value = f11(value);
    f12(value)
}

/// Threads `value` through 13 stages, left to right.
#[inline]
pub fn pipe13<A, B, C, D, E, F, G, H, I, J, K, L, M, N, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
    f7: F7,
    f8: F8,
    f9: F9,
    f10: F10,
    f11: F11,
    f12: F12,
    f13: F13,
) -> N
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
    F6: FnOnce(F) -> G,
    F7: FnOnce(G) -> H,
    F8: FnOnce(H) -> I,
    F9: FnOnce(I) -> J,
    F10: FnOnce(J) -> K,
    F11: FnOnce(K) -> L,
    F12: FnOnce(L) -> M,
    F13: FnOnce(M) -> N,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    let value = f5(value);
    let value = f6(value);
    let value = f7(value);
    let value = f8(value);
    let value = f9(value);
    let value = f10(value);
    let value = f11(value);
    let value = f12(value);
    f13(value)
}

/// Threads `value` through 14 stages, left to right.
#[inline]
pub fn pipe14<A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13, F14>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
    f7: F7,
    f8: F8,
    f9: F9,
    f10: F10,
    f11: F11,
    f12: F12,
    f13: F13,
    f14: F14,
) -> O
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
    F6: FnOnce(F) -> G,
    F7: FnOnce(G) -> H,
    F8: FnOnce(H) -> I,
    F9: FnOnce(I) -> J,
    F10: FnOnce(J) -> K,
    F11: FnOnce(K) -> L,
    F12: FnOnce(L) -> M,
    F13: FnOnce(M) -> N,
    F14: FnOnce(N) -> O,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    let value = f5(value);
    let value = f6(value);
    let value = f7(value);
    let value = f8(value);
    let value = f9(value);
    let value = f10(value);
    let value = f11(value);
    let value = f12(value);
    let value = f13(value);
    f14(value)
}

/// Threads `value` through 15 stages, left to right.
#[inline]
pub fn pipe15<A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13, F14, F15>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
    f7: F7,
    f8: F8,
    f9: F9,
    f10: F10,
    f11: F11,
    f12: F12,
    f13: F13,
    f14: F14,
    f15: F15,
) -> P
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
    F6: FnOnce(F) -> G,
    F7: FnOnce(G) -> H,
    F8: FnOnce(H) -> I,
    F9: FnOnce(I) -> J,
    F10: FnOnce(J) -> K,
    F11: FnOnce(K) -> L,
    F12: FnOnce(L) -> M,
    F13: FnOnce(M) -> N,
    F14: FnOnce(N) -> O,
    F15: FnOnce(O) -> P,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    let value = f5(value);
    let value = f6(value);
    let value = f7(value);
    let value = f8(value);
    let value = f9(value);
    let value = f10(value);
    let value = f11(value);
    let value = f12(value);
    let value = f13(value);
    let value = f14(value);
    f15(value)
}

/// Threads `value` through 16 stages, left to right.
#[inline]
pub fn pipe16<A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13, F14, F15, F16>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
    f7: F7,
    f8: F8,
    f9: F9,
    f10: F10,
    f11: F11,
    f12: F12,
    f13: F13,
    f14: F14,
    f15: F15,
    f16: F16,
) -> Q
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
    F6: FnOnce(F) -> G,
    F7: FnOnce(G) -> H,
    F8: FnOnce(H) -> I,
    F9: FnOnce(I) -> J,
    F10: FnOnce(J) -> K,
    F11: FnOnce(K) -> L,
    F12: FnOnce(L) -> M,
    F13: FnOnce(M) -> N,
    F14: FnOnce(N) -> O,
    F15: FnOnce(O) -> P,
    F16: FnOnce(P) -> Q,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    let value = f5(value);
    let value = f6(value);
    let value = f7(value);
    let value = f8(value);
    let value = f9(value);
    let value = f10(value);
    let value = f11(value);
    let value = f12(value);
    let value = f13(value);
    let value = f14(value);
    let value = f15(value);
    f16(value)
}

/// Threads `value` through 17 stages, left to right.
#[inline]
pub fn pipe17<A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13, F14, F15, F16, F17>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
    f7: F7,
    f8: F8,
    f9: F9,
    f10: F10,
    f11: F11,
    f12: F12,
    f13: F13,
    f14: F14,
    f15: F15,
    f16: F16,
    f17: F17,
) -> R
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
    F6: FnOnce(F) -> G,
    F7: FnOnce(G) -> H,
    F8: FnOnce(H) -> I,
    F9: FnOnce(I) -> J,
    F10: FnOnce(J) -> K,
    F11: FnOnce(K) -> L,
    F12: FnOnce(L) -> M,
    F13: FnOnce(M) -> N,
    F14: FnOnce(N) -> O,
    F15: FnOnce(O) -> P,
    F16: FnOnce(P) -> Q,
    F17: FnOnce(Q) -> R,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    let value = f5(value);
    let value = f6(value);
    let value = f7(value);
    let value = f8(value);
    let value = f9(value);
    let value = f10(value);
    let value = f11(value);
    let value = f12(value);
    let value = f13(value);
    let value = f14(value);
    let value = f15(value);
    let value = f16(value);
    f17(value)
}

/// Threads `value` through 18 stages, left to right.
#[inline]
pub fn pipe18<A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13, F14, F15, F16, F17, F18>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
    f7: F7,
    f8: F8,
    f9: F9,
    f10: F10,
    f11: F11,
    f12: F12,
    f13: F13,
    f14: F14,
    f15: F15,
    f16: F16,
    f17: F17,
    f18: F18,
) -> S
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
    F6: FnOnce(F) -> G,
    F7: FnOnce(G) -> H,
    F8: FnOnce(H) -> I,
    F9: FnOnce(I) -> J,
    F10: FnOnce(J) -> K,
    F11: FnOnce(K) -> L,
    F12: FnOnce(L) -> M,
    F13: FnOnce(M) -> N,
    F14: FnOnce(N) -> O,
    F15: FnOnce(O) -> P,
    F16: FnOnce(P) -> Q,
    F17: FnOnce(Q) -> R,
    F18: FnOnce(R) -> S,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    let value = f5(value);
    let value = f6(value);
    let value = f7(value);
    let value = f8(value);
    let value = f9(value);
    let value = f10(value);
    let value = f11(value);
    let value = f12(value);
    let value = f13(value);
    let value = f14(value);
    let value = f15(value);
    let value = f16(value);
    let value = f17(value);
    f18(value)
}

/// Threads `value` through 19 stages, left to right.
#[inline]
pub fn pipe19<A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13, F14, F15, F16, F17, F18, F19>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
    f7: F7,
    f8: F8,
    f9: F9,
    f10: F10,
    f11: F11,
    f12: F12,
    f13: F13,
    f14: F14,
    f15: F15,
    f16: F16,
    f17: F17,
    f18: F18,
    f19: F19,
) -> T
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
    F6: FnOnce(F) -> G,
    F7: FnOnce(G) -> H,
    F8: FnOnce(H) -> I,
    F9: FnOnce(I) -> J,
    F10: FnOnce(J) -> K,
    F11: FnOnce(K) -> L,
    F12: FnOnce(L) -> M,
    F13: FnOnce(M) -> N,
    F14: FnOnce(N) -> O,
    F15: FnOnce(O) -> P,
    F16: FnOnce(P) -> Q,
    F17: FnOnce(Q) -> R,
    F18: FnOnce(R) -> S,
    F19: FnOnce(S) -> T,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    let value = f5(value);
    let value = f6(value);
    let value = f7(value);
    let value = f8(value);
    let value = f9(value);
    let value = f10(value);
    let value = f11(value);
    let value = f12(value);
    let value = f13(value);
    let value = f14(value);
    let value = f15(value);
    let value = f16(value);
    let value = f17(value);
    let value = f18(value);
    f19(value)
}

/// Threads `value` through 20 stages, left to right.
#[inline]
pub fn pipe20<A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13, F14, F15, F16, F17, F18, F19, F20>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
    f7: F7,
    f8: F8,
    f9: F9,
    f10: F10,
    f11: F11,
    f12: F12,
    f13: F13,
    f14: F14,
    f15: F15,
    f16: F16,
    f17: F17,
    f18: F18,
    f19: F19,
    f20: F20,
) -> U
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
    F6: FnOnce(F) -> G,
    F7: FnOnce(G) -> H,
    F8: FnOnce(H) -> I,
    F9: FnOnce(I) -> J,
    F10: FnOnce(J) -> K,
    F11: FnOnce(K) -> L,
    F12: FnOnce(L) -> M,
    F13: FnOnce(M) -> N,
    F14: FnOnce(N) -> O,
    F15: FnOnce(O) -> P,
    F16: FnOnce(P) -> Q,
    F17: FnOnce(Q) -> R,
    F18: FnOnce(R) -> S,
    F19: FnOnce(S) -> T,
    F20: FnOnce(T) -> U,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    let value = f5(value);
    let value = f6(value);
    let value = f7(value);
    let value = f8(value);
    let value = f9(value);
    let value = f10(value);
    let value = f11(value);
    let value = f12(value);
    let value = f13(value);
    let value = f14(value);
    let value = f15(value);
    let value = f16(value);
    let value = f17(value);
    let value = f18(value);
    let value = f19(value);
    f20(value)
}

/// Threads `value` through 21 stages, left to right.
#[inline]
pub fn pipe21<A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13, F14, F15, F16, F17, F18, F19, F20, F21>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
    f7: F7,
    f8: F8,
    f9: F9,
    f10: F10,
    f11: F11,
    f12: F12,
    f13: F13,
    f14: F14,
    f15: F15,
    f16: F16,
    f17: F17,
    f18: F18,
    f19: F19,
    f20: F20,
    f21: F21,
) -> V
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
    F6: FnOnce(F) -> G,
    F7: FnOnce(G) -> H,
    F8: FnOnce(H) -> I,
    F9: FnOnce(I) -> J,
    F10: FnOnce(J) -> K,
    F11: FnOnce(K) -> L,
    F12: FnOnce(L) -> M,
    F13: FnOnce(M) -> N,
    F14: FnOnce(N) -> O,
    F15: FnOnce(O) -> P,
    F16: FnOnce(P) -> Q,
    F17: FnOnce(Q) -> R,
    F18: FnOnce(R) -> S,
    F19: FnOnce(S) -> T,
    F20: FnOnce(T) -> U,
    F21: FnOnce(U) -> V,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    let value = f5(value);
    let value = f6(value);
    let value = f7(value);
    let value = f8(value);
    let value = f9(value);
    let value = f10(value);
    let value = f11(value);
    let value = f12(value);
    let value = f13(value);
    let value = f14(value);
    let value = f15(value);
    let value = f16(value);
    let value = f17(value);
    let value = f18(value);
    let value = f19(value);
    let value = f20(value);
    f21(value)
}

/// Threads `value` through 22 stages, left to right.
#[inline]
pub fn pipe22<A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13, F14, F15, F16, F17, F18, F19, F20, F21, F22>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
    f7: F7,
    f8: F8,
    f9: F9,
    f10: F10,
    f11: F11,
    f12: F12,
    f13: F13,
    f14: F14,
    f15: F15,
    f16: F16,
    f17: F17,
    f18: F18,
    f19: F19,
    f20: F20,
    f21: F21,
    f22: F22,
) -> W
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
    F6: FnOnce(F) -> G,
    F7: FnOnce(G) -> H,
    F8: FnOnce(H) -> I,
    F9: FnOnce(I) -> J,
    F10: FnOnce(J) -> K,
    F11: FnOnce(K) -> L,
    F12: FnOnce(L) -> M,
    F13: FnOnce(M) -> N,
    F14: FnOnce(N) -> O,
    F15: FnOnce(O) -> P,
    F16: FnOnce(P) -> Q,
    F17: FnOnce(Q) -> R,
    F18: FnOnce(R) -> S,
    F19: FnOnce(S) -> T,
    F20: FnOnce(T) -> U,
    F21: FnOnce(U) -> V,
    F22: FnOnce(V) -> W,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    let value = f5(value);
    let value = f6(value);
    let value = f7(value);
    let value = f8(value);
    let value = f9(value);
    let value = f10(value);
    let value = f11(value);
    let value = f12(value);
    let value = f13(value);
    let value = f14(value);
    let value = f15(value);
    let value = f16(value);
    let value = f17(value);
    let value = f18(value);
    let value = f19(value);
    let value = f20(value);
    let value = f21(value);
    f22(value)
}

/// Threads `value` through 23 stages, left to right.
#[inline]
pub fn pipe23<A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
    f7: F7,
    f8: F8,
    f9: F9,
    f10: F10,
    f11: F11,
    f12: F12,
    f13: F13,
    f14: F14,
    f15: F15,
    f16: F16,
    f17: F17,
    f18: F18,
    f19: F19,
    f20: F20,
    f21: F21,
    f22: F22,
    f23: F23,
) -> X
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
    F6: FnOnce(F) -> G,
    F7: FnOnce(G) -> H,
    F8: FnOnce(H) -> I,
    F9: FnOnce(I) -> J,
    F10: FnOnce(J) -> K,
    F11: FnOnce(K) -> L,
    F12: FnOnce(L) -> M,
    F13: FnOnce(M) -> N,
    F14: FnOnce(N) -> O,
    F15: FnOnce(O) -> P,
    F16: FnOnce(P) -> Q,
    F17: FnOnce(Q) -> R,
    F18: FnOnce(R) -> S,
    F19: FnOnce(S) -> T,
    F20: FnOnce(T) -> U,
    F21: FnOnce(U) -> V,
    F22: FnOnce(V) -> W,
    F23: FnOnce(W) -> X,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    let value = f5(value);
    let value = f6(value);
    let value = f7(value);
    let value = f8(value);
    let value = f9(value);
    let value = f10(value);
    let value = f11(value);
    let value = f12(value);
    let value = f13(value);
    let value = f14(value);
    let value = f15(value);
    let value = f16(value);
    let value = f17(value);
    let value = f18(value);
    let value = f19(value);
    let value = f20(value);
    let value = f21(value);
    let value = f22(value);
    f23(value)
}

/// Threads `value` through 24 stages, left to right.
#[inline]
pub fn pipe24<A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
    f7: F7,
    f8: F8,
    f9: F9,
    f10: F10,
    f11: F11,
    f12: F12,
    f13: F13,
    f14: F14,
    f15: F15,
    f16: F16,
    f17: F17,
    f18: F18,
    f19: F19,
    f20: F20,
    f21: F21,
    f22: F22,
    f23: F23,
    f24: F24,
) -> Y
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
    F6: FnOnce(F) -> G,
    F7: FnOnce(G) -> H,
    F8: FnOnce(H) -> I,
    F9: FnOnce(I) -> J,
    F10: FnOnce(J) -> K,
    F11: FnOnce(K) -> L,
    F12: FnOnce(L) -> M,
    F13: FnOnce(M) -> N,
    F14: FnOnce(N) -> O,
    F15: FnOnce(O) -> P,
    F16: FnOnce(P) -> Q,
    F17: FnOnce(Q) -> R,
    F18: FnOnce(R) -> S,
    F19: FnOnce(S) -> T,
    F20: FnOnce(T) -> U,
    F21: FnOnce(U) -> V,
    F22: FnOnce(V) -> W,
    F23: FnOnce(W) -> X,
    F24: FnOnce(X) -> Y,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    let value = f5(value);
    let value = f6(value);
    let value = f7(value);
    let value = f8(value);
    let value = f9(value);
    let value = f10(value);
    let value = f11(value);
    let value = f12(value);
    let value = f13(value);
    let value = f14(value);
    let value = f15(value);
    let value = f16(value);
    let value = f17(value);
    let value = f18(value);
    let value = f19(value);
    let value = f20(value);
    let value = f21(value);
    let value = f22(value);
    let value = f23(value);
    f24(value)
}

/// Threads `value` through 25 stages, left to right.
#[inline]
pub fn pipe25<A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z, F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12, F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24, F25>(
    value: A,
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
    f5: F5,
    f6: F6,
    f7: F7,
    f8: F8,
    f9: F9,
    f10: F10,
    f11: F11,
    f12: F12,
    f13: F13,
    f14: F14,
    f15: F15,
    f16: F16,
    f17: F17,
    f18: F18,
    f19: F19,
    f20: F20,
    f21: F21,
    f22: F22,
    f23: F23,
    f24: F24,
    f25: F25,
) -> Z
where
    F1: FnOnce(A) -> B,
    F2: FnOnce(B) -> C,
    F3: FnOnce(C) -> D,
    F4: FnOnce(D) -> E,
    F5: FnOnce(E) -> F,
    F6: FnOnce(F) -> G,
    F7: FnOnce(G) -> H,
    F8: FnOnce(H) -> I,
    F9: FnOnce(I) -> J,
    F10: FnOnce(J) -> K,
    F11: FnOnce(K) -> L,
    F12: FnOnce(L) -> M,
    F13: FnOnce(M) -> N,
    F14: FnOnce(N) -> O,
    F15: FnOnce(O) -> P,
    F16: FnOnce(P) -> Q,
    F17: FnOnce(Q) -> R,
    F18: FnOnce(R) -> S,
    F19: FnOnce(S) -> T,
    F20: FnOnce(T) -> U,
    F21: FnOnce(U) -> V,
    F22: FnOnce(V) -> W,
    F23: FnOnce(W) -> X,
    F24: FnOnce(X) -> Y,
    F25: FnOnce(Y) -> Z,
{
    let value = f1(value);
    let value = f2(value);
    let value = f3(value);
    let value = f4(value);
    let value = f5(value);
    let value = f6(value);
    let value = f7(value);
    let value = f8(value);
    let value = f9(value);
    let value = f10(value);
    let value = f11(value);
    let value = f12(value);
    let value = f13(value);
    let value = f14(value);
    let value = f15(value);
    let value = f16(value);
    let value = f17(value);
    let value = f18(value);
    let value = f19(value);
    let value = f20(value);
    let value = f21(value);
    let value = f22(value);
    let value = f23(value);
    let value = f24(value);
    f25(value)
}
