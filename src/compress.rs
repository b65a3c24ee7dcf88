//! Compression rounds
//!
//! Runs every round of the SHA-2 compression function over an expanded
//! schedule and adds the working variables back into the hash state. The
//! round count equals the schedule length (64 or 80). Σ0, Σ1 and the round
//! constants come from the variant; `Ch` and `Maj` are the same for every
//! member of the family.

use crate::variant::BigSigma;

macro_rules! compression {
    ($name:ident, $ch:ident, $maj:ident, $word:ty, $rounds:literal, $apply:ident) => {
        /// `Ch(e, f, g)`: bits of `f` where `e` is set, bits of `g` elsewhere.
        #[inline(always)]
        pub const fn $ch(e: $word, f: $word, g: $word) -> $word {
            (e & f) ^ ((!e) & g)
        }

        /// `Maj(a, b, c)`: bitwise majority.
        #[inline(always)]
        pub const fn $maj(a: $word, b: $word, c: $word) -> $word {
            (a & b) ^ (a & c) ^ (b & c)
        }

        #[doc = concat!("Applies ", stringify!($rounds), " rounds to `state`.")]
        ///
        /// All arithmetic wraps on the word width. The state is updated in
        /// place; the schedule is only read.
        #[inline(always)]
        pub const fn $name(
            state: &mut [$word; 8],
            w: &[$word; $rounds],
            k: &[$word; $rounds],
            big_sigma_0: BigSigma,
            big_sigma_1: BigSigma,
        ) {
            let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

            let mut i = 0;
            while i < $rounds {
                let t1 = h
                    .wrapping_add(big_sigma_1.$apply(e))
                    .wrapping_add($ch(e, f, g))
                    .wrapping_add(k[i])
                    .wrapping_add(w[i]);

                let t2 = big_sigma_0.$apply(a).wrapping_add($maj(a, b, c));

                h = g;
                g = f;
                f = e;
                e = d.wrapping_add(t1);
                d = c;
                c = b;
                b = a;
                a = t1.wrapping_add(t2);

                i += 1;
            }

            state[0] = state[0].wrapping_add(a);
            state[1] = state[1].wrapping_add(b);
            state[2] = state[2].wrapping_add(c);
            state[3] = state[3].wrapping_add(d);
            state[4] = state[4].wrapping_add(e);
            state[5] = state[5].wrapping_add(f);
            state[6] = state[6].wrapping_add(g);
            state[7] = state[7].wrapping_add(h);
        }
    };
}

compression!(rounds32, ch32, maj32, u32, 64, apply_u32);
compression!(rounds64, ch64, maj64, u64, 80, apply_u64);
