//! Built-in catalog tables: categories, name templates and name prefixes.

use crate::model::CategorySpec;

/// Download link shared by every generated record.
pub const DEFAULT_LINK: &str = "https://pan.baidu.com/s/1mQ7OGPbTh6-27NFKHU49_A";

/// First id handed out by the generator.
pub const DEFAULT_ID_BASE: u64 = 1_000_000_000;

/// Placeholder substituted with the category key inside a prefix.
pub const PREFIX_PLACEHOLDER: &str = "{}";

#[rustfmt::skip]
pub const PROJECT_TEMPLATES: &[&str] = &[
    "在线商城系统", "电商平台", "跨境电商系统", "社区团购平台", "二手交易平台", "拍卖系统", "积分商城", "优惠券系统", "秒杀系统", "团购网站",
    "在线教育平台", "网课系统", "题库管理系统", "在线考试系统", "学生成绩管理", "选课系统", "排课系统", "教务管理系统", "智慧校园",
    "在线作业系统", "知识付费平台", "课程管理系统", "培训机构管理", "学习打卡系统", "在线答题系统", "医院预约挂号系统", "在线问诊平台",
    "电子病历系统", "药品管理系统", "体检预约系统", "医护排班系统", "健康管理平台", "远程医疗系统", "医疗器械管理", "处方管理系统", "社交平台",
    "论坛系统", "博客系统", "在线聊天室", "即时通讯系统", "社区系统", "交友平台", "图片分享社区", "短视频平台", "直播平台", "OA办公系统",
    "项目管理系统", "任务管理系统", "CRM客户管理", "进销存系统", "人事管理系统", "考勤管理系统", "财务管理系统", "合同管理系统",
    "文档管理系统", "工单系统", "审批流程系统", "会议室预约", "资产管理系统", "报表系统", "外卖订餐系统", "酒店预订系统", "民宿管理系统",
    "停车场管理", "家政服务平台", "美容预约系统", "健身房管理", "洗车预约系统", "宠物医院管理", "婚庆服务平台", "搬家服务系统", "维修服务平台",
    "跑腿服务系统", "快递代取系统", "洗衣服务平台", "物流管理系统", "仓储管理系统", "配送管理系统", "快递管理系统", "供应链管理", "旅游网站",
    "景点管理系统", "旅游攻略平台", "酒店管理系统", "票务预订系统", "导游预约系统", "旅行社管理", "民宿预订平台", "旅游线路管理", "景区票务系统",
    "房产中介系统", "租房平台", "二手房交易", "房屋租赁管理", "物业管理系统", "装修管理系统", "房产销售系统", "楼盘管理系统", "房源管理系统",
    "中介管理平台", "汽车租赁系统", "4S店管理系统", "汽车维修管理", "二手车交易", "驾校管理系统", "车辆管理系统", "汽车保养系统", "洗车店管理",
    "汽车配件管理", "停车管理系统", "网上银行系统", "理财平台", "贷款管理系统", "P2P借贷平台", "支付系统", "账单管理系统", "记账本应用",
    "财务分析系统", "投资管理平台", "保险管理系统", "电影票预订", "KTV管理系统", "游戏平台", "音乐播放器", "视频点播平台", "在线影院",
    "剧本杀管理", "密室逃脱预约", "电竞平台", "棋牌游戏平台", "新闻发布系统", "资讯平台", "内容管理系统", "RSS阅读器", "自媒体平台",
    "图书管理系统", "在线图书馆", "电子书阅读器", "图书借阅系统", "书店管理系统", "图书推荐系统", "阅读打卡系统", "图书交换平台", "图书评论系统",
    "数字图书馆", "餐厅点餐系统", "外卖平台", "餐饮管理系统", "菜谱管理系统", "食堂管理系统", "美食推荐平台", "订座系统", "后厨管理系统",
    "连锁餐饮管理", "食材管理系统", "智慧农业平台", "农产品销售", "农场管理系统", "农业物联网", "农资管理系统", "在线投票系统", "问卷调查系统",
    "表单系统", "签到系统", "抽奖系统", "短链接服务", "二维码生成器", "文件分享平台", "云盘系统", "图床系统", "在线简历生成", "PDF工具",
    "图片处理工具", "视频编辑工具", "音频处理工具", "智能家居系统", "物联网平台", "智能门锁管理", "智能照明系统", "环境监测系统", "智能安防系统",
    "智能农业监控", "智能仓储", "智能制造系统", "设备管理平台", "数据可视化平台", "BI系统", "数据分析工具", "报表生成系统", "数据挖掘平台",
    "日志分析系统", "监控告警系统", "性能分析工具", "用户行为分析", "数据大屏", "人脸识别系统", "图像识别平台", "语音识别系统", "智能客服",
    "聊天机器人", "推荐系统", "情感分析工具", "文本分类系统", "OCR识别系统", "智能问答系统", "失物招领系统", "志愿者管理", "活动报名系统",
    "会员管理系统", "积分系统", "评论系统", "留言板", "相册管理", "日程管理", "备忘录应用", "密码管理器", "网址导航", "天气查询系统",
    "快递查询", "违章查询系统",
];

#[rustfmt::skip]
pub const NAME_PREFIXES: &[&str] = &[
    "基于{}的", "{}实现的", "{}开发的", "智能", "在线", "移动端", "PC端", "Web端", "全栈",
    "前后端分离", "微服务", "分布式", "云端", "企业级", "轻量级", "高性能", "响应式", "跨平台",
];

/// The 15 built-in categories, 3000 records in total.
pub fn default_categories() -> Vec<CategorySpec> {
    vec![
        CategorySpec::new("SpringBoot", "01-92套-21-SpringBoot", &["SpringBoot"], 350),
        CategorySpec::new("SSM", "02-80套-SSM", &["SSM", "Spring"], 280),
        CategorySpec::new("Django", "03-50套-Django", &["Django", "Python"], 220),
        CategorySpec::new("Flask", "04-40套-Flask", &["Flask", "Python"], 180),
        CategorySpec::new("Python", "05-35套-Python", &["Python"], 200),
        CategorySpec::new("QT", "06-30套-QT", &["QT", "C++"], 150),
        CategorySpec::new("uniapp", "07-45套-uniapp", &["uniapp", "Vue"], 220),
        CategorySpec::new("小程序", "08-40套-小程序", &["小程序", "微信"], 220),
        CategorySpec::new("PHP", "09-38套-PHP", &["PHP"], 180),
        CategorySpec::new("Vue", "10-60套-Vue", &["Vue", "JavaScript"], 250),
        CategorySpec::new("React", "11-55套-React", &["React", "JavaScript"], 220),
        CategorySpec::new("Android", "12-50套-Android", &["Android", "Java"], 180),
        CategorySpec::new("微信小程序", "13-45套-微信小程序", &["微信小程序"], 150),
        CategorySpec::new("Node.js", "14-40套-Node.js", &["Node.js", "JavaScript"], 150),
        CategorySpec::new("Go", "15-35套-Go", &["Go", "Golang"], 150),
    ]
}
