//! Backend-generic test functions.
//!
//! Backends instantiate them with [`backend_test_suite!`] (one backend
//! against fixed vectors and the schoolbook oracle) and
//! [`cross_backend_test_suite!`] (two backends against each other).

pub mod conv;
pub mod mod3;
pub mod sparse;
pub mod vectors;

#[macro_export]
macro_rules! backend_test_suite {
    (
        mod $modname:ident,
        backend = $backend:ty,
        size = $size:expr,
        tests = {
            $( $(#[$attr:meta])* $test_name:ident => $impl:path ),+ $(,)?
        }
    ) => {
        mod $modname {
            use $crate::{hal::{api::ModuleNew, layouts::Module}, once_cell::sync::Lazy};

            static MODULE: Lazy<Module<$backend>> =
                Lazy::new(|| Module::<$backend>::new($size));

            $(
                $(#[$attr])*
                #[test]
                fn $test_name() {
                    ($impl)(&*MODULE);
                }
            )+
        }
    };
}

#[macro_export]
macro_rules! cross_backend_test_suite {
    (
        mod $modname:ident,
        backend_ref = $backend_ref:ty,
        backend_test = $backend_test:ty,
        size = $size:expr,
        tests = {
            $( $(#[$attr:meta])* $test_name:ident => $impl:path ),+ $(,)?
        }
    ) => {
        mod $modname {
            use $crate::{hal::{api::ModuleNew, layouts::Module}, once_cell::sync::Lazy};

            static MODULE_REF: Lazy<Module<$backend_ref>> =
                Lazy::new(|| Module::<$backend_ref>::new($size));
            static MODULE_TEST: Lazy<Module<$backend_test>> =
                Lazy::new(|| Module::<$backend_test>::new($size));

            $(
                $(#[$attr])*
                #[test]
                fn $test_name() {
                    ($impl)(&*MODULE_REF, &*MODULE_TEST);
                }
            )+
        }
    };
}
