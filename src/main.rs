use agri_engineering_toolbox::i18n::Translator;
use agri_engineering_toolbox::{app, config, i18n};
use clap::Parser;

/// 농업기계 설계 계산 CLI.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// 표시 언어 (auto, ko, en)
    #[arg(long, default_value = "auto")]
    lang: String,
    /// 번역 오버라이드 TOML 디렉터리
    #[arg(long)]
    lang_pack: Option<String>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, cfg.language.as_deref());
    let tr = Translator::new_with_pack(&lang, cli.lang_pack.as_deref());
    app::run(&mut cfg, &tr)?;
    Ok(())
}
