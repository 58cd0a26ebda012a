// Links provider plugins into the binary so their `inventory` registrations are collected.
// Add one line per optional plugin feature.
#![allow(unused_imports)]

#[cfg(feature = "static-credentials")]
use static_credentials_plugin as _;
