use axum::routing::MethodRouter;

use crate::poker_server::ServerState;

pub mod evaluate;
pub mod health_check;
pub mod index;

/// A route of the server: where it is mounted and what answers there.
pub trait Handler {
    fn router() -> MethodRouter<ServerState>;
    fn path() -> &'static str;
}

#[macro_export]
macro_rules! define_handler {
    (
        $handler_name:ident {
            Method = $method:ident;
            Path = $path:expr;
            FN = $handler_fn:ident;
            $(Preflight = $preflight_fn:ident;)?
        }
    ) => {
        pub struct $handler_name;

        impl $crate::handler::Handler for $handler_name {
            fn path() -> &'static str {
                $path
            }

            fn router() -> axum::routing::MethodRouter<$crate::poker_server::ServerState> {
                let router = axum::routing::on(axum::routing::MethodFilter::$method, $handler_fn);
                $(let router = router.options($preflight_fn);)?
                router
            }
        }
    };
}
