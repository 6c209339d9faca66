//! # xmkdevel Stanza Builder
//!
//! File: cli/src/core/stanza.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module renders the `<name>-devel_package()` function that gets appended
//! to an xbps-src template. It is a pure text transformation: given the
//! subpackage and parent names plus the newline-separated file list of the
//! parent package, it decides which paths move into the `-devel` subpackage and
//! emits one `vmove` line per decision.
//!
//! ## Architecture
//!
//! The rendering runs in three passes over the file list:
//! 1. **Prefix scan**: every entry of `DEVEL_PREFIXES`, in catalog order, that
//!    occurs anywhere in the raw text gets a `vmove <prefix>` line. The test is a
//!    plain substring search, so `/usr/lib/cmake` also matches
//!    `/usr/lib/cmake-extra/file`.
//! 2. **Library scan**: lines of the form `source -> target` are symlinks. If
//!    the source ends in `.so`, `.a` or `.la`, the matching `/usr/lib` glob is
//!    moved. Each glob is emitted at most once, in the order the lines appear.
//! 3. **Closing**: the `pkg_install` block and the package function are closed.
//!
//! ## Example
//!
//! ```rust
//! let text = stanza::generate("foo", "foo", "/usr/include/foo.h\nlibfoo.so -> libfoo.so.1");
//! // foo-devel_package() {
//! // 	short_desc+=" - development files"
//! // 	depends="foo-${version}_${revision}"
//! // 	pkg_install() {
//! // 		vmove /usr/include
//! // 		vmove "/usr/lib/*.so"
//! // 	}
//! // }
//! ```
//!
use tracing::{debug, trace};

/// Paths that belong in a `-devel` subpackage. Output follows this order.
pub const DEVEL_PREFIXES: [&str; 12] = [
    "/usr/include",
    "/usr/lib/pkgconfig",
    "/usr/share/pkgconfig",
    "/usr/lib/cmake",
    "/usr/share/cmake",
    "/usr/share/aclocal",
    "/usr/share/man/man3",
    "/usr/share/info",
    "/usr/share/gtk-doc",
    "/usr/share/gir-1.0",
    "/usr/share/vala",
    "/usr/share/doc",
];

/// Separator used by `xbps-query -f` for symlink entries.
pub const SYMLINK_SEPARATOR: &str = " -> ";

/// Library artifacts recognised on the source side of a symlink entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryKind {
    /// Shared object (`.so`).
    Shared,
    /// Static archive (`.a`).
    Static,
    /// Libtool archive (`.la`).
    Libtool,
}

impl LibraryKind {
    /// Checked in this order for every symlink source.
    pub const ALL: [LibraryKind; 3] = [
        LibraryKind::Shared,
        LibraryKind::Static,
        LibraryKind::Libtool,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            LibraryKind::Shared => ".so",
            LibraryKind::Static => ".a",
            LibraryKind::Libtool => ".la",
        }
    }

    /// The quoted glob handed to `vmove`.
    pub fn glob(self) -> &'static str {
        match self {
            LibraryKind::Shared => "\"/usr/lib/*.so\"",
            LibraryKind::Static => "\"/usr/lib/*.a\"",
            LibraryKind::Libtool => "\"/usr/lib/*.la\"",
        }
    }

    fn index(self) -> usize {
        match self {
            LibraryKind::Shared => 0,
            LibraryKind::Static => 1,
            LibraryKind::Libtool => 2,
        }
    }
}

/// Builds the lines that open the subpackage, up to and including `pkg_install() {`.
pub fn header_lines(develname: &str, pkgname: &str) -> Vec<String> {
    vec![
        format!("{}-devel_package() {{", develname),
        "\tshort_desc+=\" - development files\"".to_string(),
        format!("\tdepends=\"{}-${{version}}_${{revision}}\"", pkgname),
        "\tpkg_install() {".to_string(),
    ]
}

/// Formats a relocation directive at `pkg_install` body depth.
fn vmove_line(target: &str) -> String {
    format!("\t\tvmove {}", target)
}

/// Appends the `vmove` directives for `filelist` to `lines`, closes both
/// blocks and returns the joined text.
///
/// # Arguments
///
/// * `lines` - The header built by [`header_lines`] (or any caller-built prefix).
/// * `filelist` - Newline-separated file list; entries may be `source -> target`.
///
/// # Returns
///
/// The stanza text, lines joined with `\n` and no trailing newline. Input that
/// matches nothing still yields a well-formed stanza.
pub fn build_stanza(mut lines: Vec<String>, filelist: &str) -> String {
    for prefix in DEVEL_PREFIXES {
        if filelist.contains(prefix) {
            debug!("Moving devel prefix {}", prefix);
            lines.push(vmove_line(prefix));
        }
    }

    let mut fired = [false; 3];
    for line in filelist.split('\n') {
        let Some((source, _target)) = line.split_once(SYMLINK_SEPARATOR) else {
            continue;
        };
        for kind in LibraryKind::ALL {
            if source.ends_with(kind.suffix()) && !fired[kind.index()] {
                debug!("Symlink {:?} selects library glob {}", source, kind.glob());
                lines.push(vmove_line(kind.glob()));
                fired[kind.index()] = true;
            }
        }
    }

    lines.push("\t}".to_string());
    lines.push("}".to_string());
    trace!("Rendered {} stanza lines", lines.len());

    lines.join("\n")
}

/// Renders the complete `<develname>-devel_package()` stanza.
pub fn generate(develname: &str, pkgname: &str, filelist: &str) -> String {
    build_stanza(header_lines(develname, pkgname), filelist)
}
