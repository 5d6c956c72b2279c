pub(crate) const SHELL_STATUS_ID: &str = "elysian-web-shell-status";
pub(crate) const SHELL_HEADER_ID: &str = "elysian-web-shell-header";
pub(crate) const SHELL_MAIN_ID: &str = "elysian-web-shell-main";
pub(crate) const SHELL_FOOTER_ID: &str = "elysian-web-shell-footer";
pub(crate) const TOUR_ROOT_ID: &str = "elysian-web-shell-tour";
pub(crate) const BACK_TO_TOP_ID: &str = "elysian-web-shell-back-to-top";
pub(crate) const MUSIC_MENU_ID: &str = "elysian-web-shell-music-menu";
pub(crate) const MUSIC_MENU_LIST_ID: &str = "elysian-web-shell-music-menu-list";
pub(crate) const MOBILE_MENU_ID: &str = "mobile-menu";
pub(crate) const SHELL_STYLE_ID: &str = "elysian-web-shell-style";
pub(crate) const MODEL_GRID_ID: &str = "elysian-web-shell-model-grid";
pub(crate) const APPLY_ERROR_ID: &str = "elysian-web-shell-apply-error";
pub(crate) const APPLY_SUBMIT_ID: &str = "elysian-web-shell-apply-submit";

pub(crate) const CONFIG_OVERRIDE_GLOBAL: &str = "__ELYSIAN_CONFIG__";
pub(crate) const BOOT_FAIL_QUERY: &str = "elysian_boot_fail=1";

pub(crate) const BACK_TO_TOP_THRESHOLD_PX: f64 = 300.0;
pub(crate) const SOUND_BASE_URL: &str = "https://cdn.aistudio.dev/media/sounds";
pub(crate) const SOUND_VOLUME: f64 = 0.2;
pub(crate) const SUCCESS_SOUND_VOLUME: f64 = 0.4;

pub(crate) const SHELL_STYLESHEET: &str = "\
@keyframes elysian-scroll-text { from { transform: translateX(0); } to { transform: translateX(-50%); } }
.elysian-tag-marquee { overflow: hidden; white-space: nowrap; }
.elysian-tag-track { display: inline-flex; gap: 2rem; animation: elysian-scroll-text 30s linear infinite; }
.elysian-latest-item.grayscale img { filter: grayscale(100%); }
.elysian-latest-caption { opacity: 0; transition: opacity 0.3s; }
.elysian-latest-item:hover .elysian-latest-caption { opacity: 1; }
.elysian-mobile-link.nested { padding-left: 1.5rem; }
.elysian-mobile-heading { text-transform: uppercase; }
@media (max-width: 767px) { .elysian-nav-links { display: none; } }
@media (min-width: 768px) { .elysian-nav-hamburger, .elysian-mobile-menu { display: none; } }
";
