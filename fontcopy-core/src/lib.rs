/// fontcopy-core: moves web fonts from where npm leaves them to where the app wants them
///
/// Font packages such as `@fontsource/open-sans` ship their `.woff` and
/// `.woff2` files deep inside `node_modules`. A web app that wants to cache
/// those fonts for offline use needs them inside its own asset tree, so this
/// library lifts them over before every build.
///
/// ## One Run, Start to Finish
///
/// 1. **Target**: create the asset directory if it is missing
/// 2. **Discovery**: list the source directory and keep the web font suffixes
/// 3. **Copy**: stage each file next to its destination and rename it into place
/// 4. **Report**: log every outcome and hand back a serializable summary
///
/// A file that fails to copy is logged and skipped; the others still land.
/// An unreadable source directory is logged and ends the run quietly. Only a
/// target directory that cannot be created is a hard error.
///
/// ## Example
///
/// ```rust,no_run
/// use std::io;
/// use fontcopy_core::config::CopyConfig;
/// use fontcopy_core::copier::FontCopier;
///
/// let config = CopyConfig::new()
///     .with_source("node_modules/@fontsource/inter/files")
///     .with_target("public/fonts/inter");
///
/// let report = FontCopier::new(config).run(io::stdout(), io::stderr())?;
/// println!("{} copied, {} failed", report.copied.len(), report.failed.len());
/// #
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// ---
///
/// Crafted with care at FontLab https://www.fontlab.com/

pub mod config;
pub mod copier;
pub mod discovery;
pub mod output;
