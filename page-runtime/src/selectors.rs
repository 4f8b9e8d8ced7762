//! # Selectors 模块
//!
//! 页面结构约定：runtime 依赖的所有 id、class 与 data 属性名。

/// 固定页头
pub const SITE_HEADER_CLASS: &str = "site-header";

/// 滚动显现
pub const REVEAL_CLASS: &str = "reveal-on-scroll";
pub const VISIBLE_CLASS: &str = "is-visible";
pub const REVEAL_DELAY_ATTR: &str = "data-delay";

/// 倾斜卡片
pub const TILT_CLASS: &str = "tilt-card";

/// 模态框通用
pub const MODAL_OPEN_CLASS: &str = "is-open";
pub const MODAL_BACKDROP_CLASS: &str = "resume-modal__backdrop";

/// 简历预览
pub const RESUME_TRIGGER_CLASS: &str = "resume-open-btn";
pub const RESUME_MODAL_ID: &str = "resumeModal";
pub const RESUME_FRAME_ID: &str = "resumeFrame";
pub const RESUME_CLOSE_ID: &str = "closeResumeBtn";
pub const RESUME_DOWNLOAD_ID: &str = "resumeDownload";
pub const RESUME_TITLE_ID: &str = "resumeModalTitle";
pub const RESUME_SRC_ATTR: &str = "data-resume-src";
pub const RESUME_TITLE_ATTR: &str = "data-resume-title";

/// 项目报告预览
pub const REPORT_TRIGGER_CLASS: &str = "project-report-open-btn";
pub const REPORT_MODAL_ID: &str = "projectReportModal";
pub const REPORT_FRAME_ID: &str = "projectReportFrame";
pub const REPORT_CLOSE_ID: &str = "projectReportClose";
pub const REPORT_DOWNLOAD_ID: &str = "projectReportDownload";
pub const REPORT_TITLE_ID: &str = "projectReportTitle";
pub const REPORT_SRC_ATTR: &str = "data-report-src";
pub const REPORT_TITLE_ATTR: &str = "data-report-title";

/// 项目截图轮播
pub const SCREENSHOTS_TRIGGER_CLASS: &str = "project-screenshots-open-btn";
pub const SCREENSHOTS_MODAL_ID: &str = "projectScreenshotsModal";
pub const SCREENSHOTS_IMAGE_ID: &str = "projectScreenshotImage";
pub const SCREENSHOTS_CAPTION_ID: &str = "projectScreenshotCaption";
pub const SCREENSHOTS_CLOSE_ID: &str = "projectScreenshotsClose";
pub const SCREENSHOTS_PREV_ID: &str = "projectScreenshotPrev";
pub const SCREENSHOTS_NEXT_ID: &str = "projectScreenshotNext";
pub const SCREENSHOTS_IMAGES_ATTR: &str = "data-images";
