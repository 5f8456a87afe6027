use log::Log;
use log::{Level, LevelFilter};
use log::{Metadata, Record};

struct Logger;

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // 程序里的日志 target 就是 bin 名，库里的是 user::<模块>
        println!(
            "\u{1B}[{}m[{:<5}] [{}] {}\u{1B}[0m",
            color(record.level()),
            record.level(),
            source(record.target()),
            record.args()
        );
    }

    fn flush(&self) {}
}

fn color(level: Level) -> u8 {
    use Level::*;
    match level {
        Error => 31,
        Warn => 93,
        Info => 34,
        Debug => 32,
        Trace => 90,
    }
}

/// 程序内的日志只保留 bin 名，省去子模块路径
fn source(target: &str) -> &str {
    match target.split_once("::") {
        Some(("user", _)) | None => target,
        Some((program, _)) => program,
    }
}

/// 编译时通过环境变量`LOG`指定级别，缺省关闭
#[cfg_attr(test, allow(dead_code))]
pub fn init() {
    static LOGGER: Logger = Logger;
    // 只会在 _start 中调用一次
    if log::set_logger(&LOGGER).is_err() {
        return;
    }

    let level = option_env!("LOG")
        .and_then(|s: &'static str| s.parse().ok())
        .unwrap_or(LevelFilter::Off);
    log::set_max_level(level);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_names_the_program() {
        assert_eq!("multi_exec", source("multi_exec"));
        assert_eq!("swap5", source("swap5::pattern"));
        assert_eq!("user::launch", source("user::launch"));
    }

    #[test]
    fn every_level_has_its_own_color() {
        let colors = [
            Level::Error,
            Level::Warn,
            Level::Info,
            Level::Debug,
            Level::Trace,
        ]
        .map(color);
        for (i, c) in colors.iter().enumerate() {
            assert!(!colors[i + 1..].contains(c));
        }
    }
}
