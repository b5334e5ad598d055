//! Protobuf messages and the gRPC client for the Xray `HandlerService` API.
//!
//! The files under `generated/` are checked-in prost/tonic output for the
//! `.proto` sources in `proto/`. Module paths follow the protobuf packages so
//! that cross-package references (`super::super::...`) resolve the same way
//! they do in the generator output.

pub mod xray {
    pub mod common {
        pub mod serial {
            include!("generated/xray/xray.common.serial.rs");
        }

        pub mod protocol {
            include!("generated/xray/xray.common.protocol.rs");
        }
    }

    pub mod proxy {
        pub mod vless {
            include!("generated/xray/xray.proxy.vless.rs");
        }
    }

    pub mod app {
        pub mod proxyman {
            pub mod command {
                include!("generated/xray/xray.app.proxyman.command.rs");
                include!("generated/xray/xray.app.proxyman.command.tonic.rs");
            }
        }
    }
}
