/*! Integration tests for LiteLearn.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - identity: registration, authentication, and session behavior
 * - enrollment: enroll/unenroll round trips and progress tracking
 * - query: catalog filtering, the dashboard listing, account summaries
 * - portability: export, import validation, and the full wipe
 * - storage: persistence and corruption tolerance of the adapters
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("litelearn=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod helpers;
mod identity;
mod portability;
mod storage;
