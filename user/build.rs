use std::env;

fn main() {
    println!("cargo:rerun-if-changed=src/linker.ld");

    // 只有裸机目标才需要链接脚本，宿主机上跑单元测试时不注入
    let target = env::var("TARGET").unwrap_or_default();
    if target.starts_with("riscv64") {
        let dir = env::var("CARGO_MANIFEST_DIR").unwrap();
        println!("cargo:rustc-link-arg-bins=-T{dir}/src/linker.ld");
    }
}
