//!
//! The handler wrapper generators.
//!

use crate::contract::function::Function;

/// The clamp statement shared by all payable wrappers.
const PAYABLE_CLAMP: &str = "\n\t\tuint256 msgValue = clampLte(msg.value, actor.balance());\n";

///
/// Renders the wrapper signature `function {instance}_{name}({parameters})`.
///
/// This exact text doubles as the duplicate-detection key in the merge
/// engine, so it must stay byte-stable for a given parameter list.
///
pub fn signature(instance: &str, name: &str, parameters: &str) -> String {
    format!("function {instance}_{name}({parameters})")
}

///
/// Renders the handler wrapper for an ordinary callable.
///
/// The wrapper impersonates an actor and forwards the fuzzed arguments to the
/// target, or to the target's proxy when proxy mode is active. Payable
/// callables clamp the attached value to the actor's balance first.
///
pub fn wrapper(instance: &str, function: &Function, use_proxy: bool) -> String {
    let signature = self::signature(instance, &function.name, &function.parameter_list());
    let payable = if function.is_payable() { "payable " } else { "" };
    let clamp = if function.is_payable() {
        PAYABLE_CLAMP
    } else {
        ""
    };
    let value = if function.is_payable() {
        "{value: msgValue}"
    } else {
        ""
    };
    let target = if use_proxy {
        format!("{instance}Proxy")
    } else {
        instance.to_owned()
    };

    format!(
        "\n\n\t{signature} public {payable}useActor globalProperties {{{clamp}\n\t\tvm.prank(address(actor));\n\t\t{target}.{name}{value}({arguments});\n\t}}",
        name = function.name,
        arguments = function.argument_list(),
    )
}

///
/// Renders the wrapper for the `receive` callable, which is always payable.
///
pub fn receive_wrapper(instance: &str) -> String {
    format!(
        "\n\n\tfunction {instance}_receive() public payable useActor globalProperties {{\n\t\tuint256 msgValue = clampLte(msg.value, actor.balance());\n\n\t\tvm.prank(address(actor));\n\t\t(bool success,) = address({instance}).call{{value: msgValue}}(\"\");\n\n\t\tt(success, \"receive call failed\");\n\t}}"
    )
}

///
/// Renders the wrapper for the `fallback` callable.
///
pub fn fallback_wrapper(instance: &str, is_payable: bool) -> String {
    let payable = if is_payable { "payable " } else { "" };
    let clamp = if is_payable { PAYABLE_CLAMP } else { "" };
    let value = if is_payable { "{value: msgValue}" } else { "" };

    format!(
        "\n\n\tfunction {instance}_fallback() public {payable}useActor globalProperties {{{clamp}\n\t\tvm.prank(address(actor));\n\t\t(bool success,) = address({instance}).call{value}(\"\");\n\n\t\tt(success, \"fallback call failed\");\n\t}}"
    )
}

///
/// Renders the extra wrapper that force-sends ETH to the target, used to
/// exercise balance-dependent properties.
///
pub fn force_send_eth_wrapper(instance: &str) -> String {
    format!(
        "\n\n\tfunction {instance}_forceSendETH(uint256 amount) public useActor globalProperties {{\n\t\tamount = clampLte(amount, actor.balance());\n\n\t\tactor.forceSendETH(address({instance}), amount);\n\t}}"
    )
}
