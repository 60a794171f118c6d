/// A `Default` value of a type with some fields overridden. Without a type, overrides `T`.
#[macro_export]
macro_rules! new_t {
    ($t:ty, $($k:ident = $v:expr),+ $(,)?) => {{
        let mut c = <$t>::default();
        $(c.$k = $v;)+
        c
    }};
    ($($k:ident = $v:expr),+ $(,)?) => {$crate::new_t!(T, $($k = $v,)+)};
}

/// Stamp out one test per generator type, each handed a generator seeded with `$seed`.
/// The generator types must implement `rand::SeedableRng`.
#[macro_export]
macro_rules! test_rng {
  ($name:ident[$($impl:ident)|*]($rng:ident, $seed:expr) $body:block) => {$(
      ::paste::paste! {
          #[test]
          fn [<test_ $name _ $impl:snake>]() {
            let mut $rng = <$impl as ::rand::SeedableRng>::seed_from_u64($seed);
            $body
          }
      }
  )+};
}

#[macro_export]
macro_rules! assert_f64_approx {
    ($l:expr, $r:expr) => {
        assert!(
            ($l - $r).abs() < f64::EPSILON,
            "assertion failed: {} !~ {}",
            $l,
            $r
        )
    };
    ($l:expr, $r:expr, $msg:expr) => {
        assert!(
            ($l - $r).abs() < f64::EPSILON,
            "assertion failed: {} !~ {}: {}",
            $l,
            $r,
            $msg
        )
    };
}
