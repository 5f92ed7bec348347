//! Splits the tofushim version override from arguments meant for `tofu`

use std::ffi::{OsStr, OsString};

/// Version used when `--tofu-version` is not given
pub const DEFAULT_TOFU_VERSION: &str = "1.9.0";

/// Reserved two-token flag selecting the OpenTofu version
pub const VERSION_FLAG: &str = "--tofu-version";

/// Separates `--tofu-version <v>` from the forwarded arguments
///
/// The flag and its value are consumed wherever they appear. A trailing
/// `--tofu-version` with no value is forwarded like any other argument.
/// When the flag is repeated, the last value wins.
///
/// Arguments are OS strings: anything the platform can pass to `tofu`,
/// including non-UTF-8 bytes, is forwarded untouched. The version is
/// returned raw as well and checked when the configuration is built.
///
/// # Returns
///
/// `(version, forwarded_args)` with forwarded arguments in their original order
pub fn split_args<I, S>(args: I) -> (OsString, Vec<OsString>)
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut version = OsString::from(DEFAULT_TOFU_VERSION);
    let mut forwarded = Vec::new();
    let mut args = args.into_iter().map(Into::into).peekable();

    while let Some(arg) = args.next() {
        if arg.as_os_str() == OsStr::new(VERSION_FLAG) && args.peek().is_some() {
            if let Some(value) = args.next() {
                version = value;
            }
        } else {
            forwarded.push(arg);
        }
    }

    (version, forwarded)
}
