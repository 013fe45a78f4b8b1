pub mod shared {
    pub mod core {
        pub mod flash;
        pub mod links;
    }
    pub mod infrastructure {
        pub mod html;
        pub mod page_store;
    }
}

pub mod modules {
    pub mod simple_site {
        pub mod core {
            pub mod page;
        }
        pub mod use_cases {
            pub mod list_pages {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod add_page {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod view_page {
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod static_page {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod registration {
        pub mod use_cases {
            pub mod register_account {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod registration_success {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
    pub mod absolute_urls {
        pub mod use_cases {
            pub mod link_pages {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
