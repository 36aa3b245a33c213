//! 英文翻译 (en-US)

use super::keys::{
    AlertTexts, CategoryTexts, CommonTexts, ConfirmDeleteTexts, FormTexts, HelpTexts, HintTexts,
    ListTexts, ModalTexts, NoticeTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Trademark Registry",
        loading: "Loading...",
        not_available: "N/A",
        records: "records",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        navigate: "Navigate",
        new: "New",
        edit: "Edit",
        delete: "Delete",
        search: "Search",
        run_search: "Run search",
        clear: "Clear",
        reload: "Reload",
        switch_focus: "Switch focus",
        next_field: "Next field",
        switch_option: "Switch",
        submit: "Submit",
        cancel: "Cancel",
        back: "Back",
        help: "Help",
        quit: "Quit",
    },

    // ========================================================================
    // 页面
    // ========================================================================
    list: ListTexts {
        title: "Registered trademarks",
        search_title: "Search",
        search_placeholder: "Name, holder or registration number",
        col_name: "Name",
        col_holder: "Holder",
        col_number: "Reg. No",
        col_category: "Category",
        col_status: "Status",
        col_date: "Registered",
        col_actions: "Actions",
        actions_hint: "Alt+e Alt+d",
        empty: "No trademarks registered.",
        empty_hint: "Press Alt+a to register the first one.",
        empty_search: "No trademarks match the search.",
        empty_search_hint: "Press Alt+c to clear the search.",
    },
    form: FormTexts {
        title_new: "New trademark",
        title_edit: "Edit trademark",
        name: "Name *",
        holder: "Holder *",
        registration_number: "Registration No *",
        category: "Category *",
        status: "Status",
        description: "Description",
        select: "Select a category",
        required_note: "* Required fields",
        saving: "Saving...",
        busy: "Please wait for the current request to finish",
    },
    categories: CategoryTexts {
        technology: "Technology",
        food: "Food",
        textile: "Textile",
        services: "Services",
        pharmaceutical: "Pharmaceutical",
        automotive: "Automotive",
        other: "Other",
    },
    statuses: StatusTexts {
        active: "Active",
        pending: "Pending",
        expired: "Expired",
        cancelled: "Cancelled",
    },

    // ========================================================================
    // 通知
    // ========================================================================
    notices: NoticeTexts {
        created: "Trademark created successfully",
        updated: "Trademark updated successfully",
        deleted: "Trademark deleted successfully",
        error_prefix: "Error",
        save_failed: "Error saving the trademark",
        delete_failed: "Error deleting the trademark",
        load_failed: "Error loading trademarks",
        search_failed: "Error searching trademarks",
        connection_failed: "Could not connect to the trademark service",
        unexpected_response: "Unexpected response from the trademark service",
        missing_fields: "Please fill in the required fields",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    modal: ModalTexts {
        confirm_delete: ConfirmDeleteTexts {
            title: "Confirm Deletion",
            message: "Are you sure you want to delete this trademark?",
            confirm_button: "Delete",
            cancel_button: "Cancel",
        },
        alert: AlertTexts {
            info_title: "Done",
            error_title: "Error",
            close_hint: "Press Esc or Enter to close",
        },
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        list_section: "Trademark list",
        form_section: "Trademark form",
        close_hint: "Press Esc to close the help",
    },
};
