//! WEDOS WAPI 真实环境集成测试
//!
//! 运行方式:
//! ```bash
//! WEDOS_USER=xxx WEDOS_AUTH=xxx TEST_DOMAIN=example.com \
//!     cargo test -p wedos-dns-provider --test wedos_live_test -- --ignored --nocapture --test-threads=1
//! ```
//!
//! WAPI 只接受白名单 IP 的请求，请先在 WEDOS 客户中心登记本机地址。

mod common;

use common::{TestContext, generate_test_token};
use wedos_dns_provider::Dns01Solver;

// ============ 基础测试 ============

#[tokio::test]
#[ignore]
async fn test_wedos_ping() {
    skip_if_no_credentials!("WEDOS_USER", "WEDOS_AUTH", "TEST_DOMAIN");

    let ctx = TestContext::wedos().expect("创建测试上下文失败");
    let response = require_ok!(ctx.client.ping().await, "ping 调用失败");

    assert!(response.is_success());
    println!("✓ ping 测试通过, code {}", response.code);
}

#[tokio::test]
#[ignore]
async fn test_wedos_validate_credentials() {
    skip_if_no_credentials!("WEDOS_USER", "WEDOS_AUTH", "TEST_DOMAIN");

    let ctx = TestContext::wedos().expect("创建测试上下文失败");
    let valid = require_ok!(
        ctx.client.validate_credentials().await,
        "validate_credentials 调用失败"
    );
    assert!(valid, "凭证应该有效");

    println!("✓ validate_credentials 测试通过");
}

#[tokio::test]
#[ignore]
async fn test_wedos_list_rows() {
    skip_if_no_credentials!("WEDOS_USER", "WEDOS_AUTH", "TEST_DOMAIN");

    let ctx = TestContext::wedos().expect("创建测试上下文失败");
    let rows = require_ok!(ctx.client.list_rows(&ctx.domain).await, "list_rows 调用失败");

    println!("✓ list_rows 测试通过，共 {} 条记录", rows.len());
}

// ============ DNS-01 流程 ============

#[tokio::test]
#[ignore]
async fn test_wedos_challenge_lifecycle() {
    skip_if_no_credentials!("WEDOS_USER", "WEDOS_AUTH", "TEST_DOMAIN");

    let ctx = TestContext::wedos().expect("创建测试上下文失败");
    let token = generate_test_token();
    let host = ctx.challenge_host();

    // 1. 创建
    require_ok!(
        ctx.solver.perform(&ctx.domain, &host, &token).await,
        "perform 调用失败"
    );
    println!("  已创建 TXT 记录: {host}");

    // 2. 查询
    let found = require_ok!(
        ctx.client.find_row_by_value(&ctx.domain, &token).await,
        "find_row_by_value 调用失败"
    );
    assert!(found.is_some(), "新建的记录应该可以查到");

    // 3. 清理
    require_ok!(
        ctx.solver.cleanup(&ctx.domain, &host, &token).await,
        "cleanup 调用失败"
    );

    let found = require_ok!(
        ctx.client.find_row_by_value(&ctx.domain, &token).await,
        "find_row_by_value 调用失败"
    );
    assert!(found.is_none(), "清理后记录应该已删除");

    println!("✓ DNS-01 生命周期测试通过");
}

#[tokio::test]
#[ignore]
async fn test_wedos_cleanup_missing_record() {
    skip_if_no_credentials!("WEDOS_USER", "WEDOS_AUTH", "TEST_DOMAIN");

    let ctx = TestContext::wedos().expect("创建测试上下文失败");
    let token = generate_test_token();

    require_ok!(
        ctx.solver
            .cleanup(&ctx.domain, &ctx.challenge_host(), &token)
            .await,
        "清理不存在的记录不应报错"
    );

    println!("✓ 清理不存在记录测试通过");
}
